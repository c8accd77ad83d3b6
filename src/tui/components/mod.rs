// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: App name and view tabs
// - Status bar: view, card count, lock state, latest log line
// - Toast: transient confirmation overlay
//
// Deck components render the active view:
// - Deck panel: grid + detail overlay bound to one controller
// - Card grid / card detail: the drawing halves of the deck panel

pub mod card_detail;
pub mod card_grid;
pub mod deck_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use deck_panel::{DeckPanel, DeckSurface};
pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
