//! Page scrolling gated by the scroll lock

use super::Component;
use crate::tui::scroll::ScrollState;

/// One scroll movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
}

/// A component whose page can scroll.
///
/// Implementors own a `ScrollState` and say whether scrolling is currently
/// allowed; every movement checks `scroll_enabled()` and reports `false`
/// when it was refused, so a held scroll lock freezes the page for wheel
/// and PageUp/PageDown alike.
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_enabled(&self) -> bool {
        true
    }

    /// Apply `step` unless scrolling is refused
    fn scroll(&mut self, step: ScrollStep) -> bool {
        if !self.scroll_enabled() {
            return false;
        }
        let state = self.scroll_state_mut();
        match step {
            ScrollStep::LineUp => state.scroll_up(),
            ScrollStep::LineDown => state.scroll_down(),
            ScrollStep::PageUp => state.page_up(),
            ScrollStep::PageDown => state.page_down(),
        }
        true
    }

    fn scroll_up(&mut self) -> bool {
        self.scroll(ScrollStep::LineUp)
    }

    fn scroll_down(&mut self) -> bool {
        self.scroll(ScrollStep::LineDown)
    }

    fn page_up(&mut self) -> bool {
        self.scroll(ScrollStep::PageUp)
    }

    fn page_down(&mut self) -> bool {
        self.scroll(ScrollStep::PageDown)
    }

    /// First visible grid row
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }
}
