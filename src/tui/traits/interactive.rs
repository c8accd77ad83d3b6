//! Keyboard handling for deck components

use super::Component;
use crossterm::event::KeyEvent;

/// Whether a component consumed an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    /// Let the App try its own bindings
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// A component that takes keyboard input when its view is active.
///
/// The App only forwards keys that neither a modal nor its global bindings
/// claimed, except while a card is expanded: then the deck sees every key
/// first and anything it returns `Handled::No` for is dropped, apart from
/// the few keys the App still honours (copy, reload, quit).
pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hint shown in the status bar
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
