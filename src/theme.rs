// Theme system for the TUI
//
// Themes are compiled-in palettes looked up by name. Unknown names fall
// back to the default palette with a warning rather than failing startup.

use crate::config::DEFAULT_THEME;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,

    // ─── Card Colors ─────────────────────────────────────────
    pub card_title: Color,
    pub card_subtitle: Color,
    pub accent: Color,
    pub error: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

/// Raw palette entry, resolved into a `Theme` with the config applied
struct Palette {
    name: &'static str,
    background: Color,
    foreground: Color,
    title: Color,
    border: Color,
    highlight: Color,
    card_subtitle: Color,
    accent: Color,
    error: Color,
    selection: Color,
    muted: Color,
    border_type: BorderType,
}

const PALETTES: &[Palette] = &[
    Palette {
        name: "Nexus Dark",
        background: Color::Rgb(16, 18, 28),
        foreground: Color::Rgb(220, 224, 235),
        title: Color::Rgb(110, 168, 254),
        border: Color::Rgb(70, 78, 104),
        highlight: Color::Rgb(250, 204, 21),
        card_subtitle: Color::Rgb(167, 139, 250),
        accent: Color::Rgb(45, 212, 191),
        error: Color::Rgb(248, 113, 113),
        selection: Color::Rgb(40, 48, 74),
        muted: Color::Rgb(128, 136, 160),
        border_type: BorderType::Rounded,
    },
    Palette {
        name: "Nexus Light",
        background: Color::Rgb(248, 249, 252),
        foreground: Color::Rgb(30, 34, 46),
        title: Color::Rgb(37, 99, 235),
        border: Color::Rgb(180, 186, 204),
        highlight: Color::Rgb(217, 119, 6),
        card_subtitle: Color::Rgb(124, 58, 237),
        accent: Color::Rgb(13, 148, 136),
        error: Color::Rgb(220, 38, 38),
        selection: Color::Rgb(219, 228, 250),
        muted: Color::Rgb(110, 116, 134),
        border_type: BorderType::Rounded,
    },
    Palette {
        name: "Dracula",
        background: Color::Rgb(40, 42, 54),
        foreground: Color::Rgb(248, 248, 242),
        title: Color::Rgb(189, 147, 249),
        border: Color::Rgb(98, 114, 164),
        highlight: Color::Rgb(241, 250, 140),
        card_subtitle: Color::Rgb(255, 121, 198),
        accent: Color::Rgb(139, 233, 253),
        error: Color::Rgb(255, 85, 85),
        selection: Color::Rgb(68, 71, 90),
        muted: Color::Rgb(98, 114, 164),
        border_type: BorderType::Plain,
    },
    Palette {
        name: "Nord",
        background: Color::Rgb(46, 52, 64),
        foreground: Color::Rgb(216, 222, 233),
        title: Color::Rgb(136, 192, 208),
        border: Color::Rgb(76, 86, 106),
        highlight: Color::Rgb(235, 203, 139),
        card_subtitle: Color::Rgb(180, 142, 173),
        accent: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection: Color::Rgb(67, 76, 94),
        muted: Color::Rgb(129, 161, 193),
        border_type: BorderType::Plain,
    },
    Palette {
        name: "Gruvbox Dark",
        background: Color::Rgb(40, 40, 40),
        foreground: Color::Rgb(235, 219, 178),
        title: Color::Rgb(131, 165, 152),
        border: Color::Rgb(102, 92, 84),
        highlight: Color::Rgb(250, 189, 47),
        card_subtitle: Color::Rgb(211, 134, 155),
        accent: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection: Color::Rgb(80, 73, 69),
        muted: Color::Rgb(146, 131, 116),
        border_type: BorderType::Thick,
    },
    Palette {
        name: "Terminal",
        background: Color::Reset,
        foreground: Color::Reset,
        title: Color::Cyan,
        border: Color::DarkGray,
        highlight: Color::Yellow,
        card_subtitle: Color::Magenta,
        accent: Color::Green,
        error: Color::Red,
        selection: Color::DarkGray,
        muted: Color::Gray,
        border_type: BorderType::Plain,
    },
];

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name (case-insensitive), falling back to the default palette
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        let palette = PALETTES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                tracing::warn!("Unknown theme '{}', using {}", name, DEFAULT_THEME);
                &PALETTES[0]
            });

        Self::from_palette(palette, config)
    }

    fn from_palette(p: &Palette, config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            p.background
        } else {
            Color::Reset
        };

        Self {
            name: p.name.to_string(),
            background,
            foreground: p.foreground,
            title: p.title,
            border: p.border,
            highlight: p.highlight,
            status_bar: p.muted,
            card_title: p.foreground,
            card_subtitle: p.card_subtitle,
            accent: p.accent,
            error: p.error,
            selection: p.selection,
            muted: p.muted,
            border_type: p.border_type,
        }
    }

    /// Border color for a card or panel based on focus state
    pub fn card_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }

    /// List all available themes
    pub fn list_available() -> Vec<String> {
        PALETTES.iter().map(|p| p.name.to_string()).collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(DEFAULT_THEME)
    }
}
