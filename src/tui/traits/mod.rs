//! Capability traits for the deck components
//!
//! The App never matches on which deck is showing to render, scroll or
//! copy. Both `DeckPanel<MemberProfile>` and `DeckPanel<ProjectSummary>`
//! implement these traits and are driven through `&mut dyn DeckSurface`.
//!
//! ```text
//!   App ── view ──▶ &mut dyn DeckSurface
//!                        │
//!        ┌───────────────┼───────────────┬──────────────┐
//!        ▼               ▼               ▼              ▼
//!   Component       Interactive      Scrollable      Copyable
//!   (render, id)    (keys, hint)     (page scroll,   (`y` target)
//!                                     lock-aware)
//! ```

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;
