//! Width breakpoints for the deck screens.
//!
//! Grid columns, detail panel width and status bar density all switch on
//! the same thresholds, kept here so render code has no magic numbers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: one card per row, panel nearly full width
    Compact,
    /// 60-99 cols: two cards per row
    Normal,
    /// 100+ cols: three cards per row
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// Card columns in the deck grid
    pub fn grid_columns(self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Normal => 2,
            Breakpoint::Wide => 3,
        }
    }

    /// Width of the expanded detail panel on a screen `screen_width` wide
    pub fn detail_width(self, screen_width: u16) -> u16 {
        let preferred = match self {
            Breakpoint::Compact => screen_width.saturating_sub(2),
            Breakpoint::Normal => 64,
            Breakpoint::Wide => 72,
        };
        preferred.min(screen_width.saturating_sub(2))
    }
}
