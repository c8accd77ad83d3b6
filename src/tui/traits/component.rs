//! Rendering half of a deck: identity, a render context, and `render`

use crate::deck::MorphLayer;
use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Team member grid and its detail overlay
    TeamDeck,
    /// Project grid and its detail overlay
    ProjectDeck,
}

impl ComponentId {
    /// Label used in toasts and the title bar
    pub fn label(&self) -> &'static str {
        match self {
            ComponentId::TeamDeck => "Team",
            ComponentId::ProjectDeck => "Projects",
        }
    }
}

/// Read-only state a deck needs while drawing
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Shared-element animation in flight, if any
    pub morph: &'a MorphLayer,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, morph: &'a MorphLayer) -> Self {
        Self { theme, morph }
    }
}

/// Rendering takes `&mut self`: decks record where their cards and detail
/// panel landed so pointer events can be hit-tested against the last frame.
pub trait Component {
    fn id(&self) -> ComponentId;

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
