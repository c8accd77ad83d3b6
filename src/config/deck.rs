//! Deck behavior settings

use serde::Deserialize;

/// `[deck]` settings
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Ticks the expand/collapse morph takes (0 = no animation)
    pub morph_frames: u16,
    /// Capture the mouse (click to expand, click outside to close)
    pub mouse: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            morph_frames: 4,
            mouse: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDeck {
    pub morph_frames: Option<u16>,
    pub mouse: Option<bool>,
}

impl DeckConfig {
    pub fn from_file(file: Option<FileDeck>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            morph_frames: file.morph_frames.unwrap_or(defaults.morph_frames),
            mouse: file.mouse.unwrap_or(defaults.mouse),
        }
    }
}
