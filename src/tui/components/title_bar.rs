// Title bar component
//
// Renders the app name and the view tabs; the active view is highlighted.

use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let tab = |view: View, key: &'static str| -> Vec<Span<'static>> {
        let style = if app.view == view {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted)
        };
        vec![
            Span::styled(format!("{} ", key), Style::default().fg(theme.muted)),
            Span::styled(view.name(), style),
            Span::raw("  "),
        ]
    };

    let mut spans = vec![Span::styled(
        " ◆ crewdeck ── ",
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    )];
    spans.extend(tab(View::Team, "F1"));
    spans.extend(tab(View::Projects, "F2"));

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
