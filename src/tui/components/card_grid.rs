//! Compact card grid
//!
//! Lays cards out row-major in `columns` columns of fixed height and draws
//! the rows inside the scroll window. Returns where each visible card
//! landed so clicks and morph origins can be resolved against this frame.

use crate::roster::{CardContent, CardId};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Terminal rows per card: border, headline, subtitle, two summary lines, border
pub const CARD_HEIGHT: u16 = 6;

/// One card as the grid sees it
pub struct GridCard<'a> {
    pub id: &'a CardId,
    pub content: &'a dyn CardContent,
}

/// Number of grid rows needed for `count` cards
pub fn row_count(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// Rows that fit in `height` terminal lines (at least one if anything fits)
pub fn visible_rows(height: u16) -> usize {
    if height == 0 {
        0
    } else {
        usize::from((height / CARD_HEIGHT).max(1))
    }
}

/// Draw the visible rows and return each drawn card's rectangle
pub fn render(
    f: &mut Frame,
    area: Rect,
    cards: &[GridCard<'_>],
    columns: usize,
    first_row: usize,
    focus: Option<usize>,
    theme: &Theme,
) -> Vec<(CardId, Rect)> {
    if cards.is_empty() {
        let empty = Paragraph::new("No cards in this deck")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted));
        f.render_widget(empty, area);
        return Vec::new();
    }

    let columns = columns.max(1);
    let rows = visible_rows(area.height);
    let card_width = area.width / columns as u16;
    let mut drawn = Vec::new();

    for (slot, index) in (first_row * columns..cards.len()).enumerate() {
        let row = slot / columns;
        if row >= rows {
            break;
        }
        let col = slot % columns;

        // Last column absorbs the remainder of the division
        let x = area.x + card_width * col as u16;
        let width = if col + 1 == columns {
            area.right() - x
        } else {
            card_width
        };
        let y = area.y + CARD_HEIGHT * row as u16;
        let rect = Rect::new(x, y, width, CARD_HEIGHT).intersection(area);
        if rect.is_empty() {
            continue;
        }

        let card = &cards[index];
        render_card(f, rect, card.content, focus == Some(index), theme);
        drawn.push((card.id.clone(), rect));
    }

    drawn
}

fn render_card(f: &mut Frame, area: Rect, content: &dyn CardContent, focused: bool, theme: &Theme) {
    let mut headline_style = Style::default()
        .fg(theme.card_title)
        .add_modifier(Modifier::BOLD);
    if focused {
        headline_style = headline_style.fg(theme.highlight);
    }

    let mut lines = vec![Line::from(Span::styled(
        content.headline().to_string(),
        headline_style,
    ))];
    if let Some(subtitle) = content.subtitle() {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(theme.card_subtitle),
        )));
    }
    for line in content.summary() {
        lines.push(Line::from(Span::styled(line, Style::default().fg(theme.muted))));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.card_border(focused)));
    if focused {
        block = block.style(Style::default().bg(theme.selection));
    }

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}
