// Deck module - expandable card interaction
//
// - controller: which card is expanded, dismissal triggers, lock ownership
// - scroll_lock: reference-counted page scroll suppression
// - transition: correlation keys shared by a card and its detail panel
// - morph: small animation layer consuming those keys

pub mod controller;
pub mod morph;
pub mod scroll_lock;
pub mod transition;

pub use controller::{DeckError, DeckState, ExpandableCardController};
pub use morph::MorphLayer;
pub use scroll_lock::ScrollLock;
pub use transition::{Transition, TransitionKey};
