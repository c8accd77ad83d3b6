// Views module - screen-level rendering logic
//
// Layer order, bottom to top:
//   shell (title, grid, status) → dimmed backdrop + detail panel
//   → collapse outline → modal → toast

mod help;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let screen = f.area();

    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, screen);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(screen);

    components::render_title(f, chunks[0], app);
    {
        let (deck, ctx) = app.render_parts();
        deck.render(f, chunks[1], &ctx);
    }
    components::render_status(f, chunks[2], app);

    {
        let (deck, ctx) = app.render_parts();
        deck.render_overlay(f, screen, &ctx);
    }
    if let Some(outline) = app.morph.collapse_outline() {
        render_outline(f, outline.intersection(screen), app);
    }

    if let Some(modal) = &app.modal {
        help::render(f, modal, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, screen, &app.theme);
    }
}

/// Shrinking frame left behind by a collapsing panel
fn render_outline(f: &mut Frame, area: Rect, app: &App) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let outline = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    f.render_widget(outline, area);
}
