// Status bar component
//
// Renders the view, card count, scroll lock state, a key hint and the
// most recent log line at the bottom of the screen.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide/Normal: hint and latest log line included
/// - Compact: view, count and lock only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let deck = app.active_deck();
    let bp = Breakpoint::from_width(area.width);

    let lock = if app.scroll_lock.is_locked() {
        "🔒 locked"
    } else {
        "↕ scroll"
    };
    let mut status_text = format!(
        " {} │ {} card(s) │ {}",
        app.view.name(),
        deck.card_count(),
        lock
    );

    if bp.at_least(Breakpoint::Normal) {
        if let Some(hint) = deck.focus_hint() {
            status_text.push_str(&format!(" │ {}", hint));
        }
        if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Info) {
            status_text.push_str(&format!(
                " │ {} {} {}",
                entry.timestamp.with_timezone(&Local).format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ));
        }
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
