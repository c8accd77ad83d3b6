// Modal overlay rendering
//
// - Help modal: keyboard shortcuts and current config
// - Notice modal: a message to acknowledge (roster reload failures)

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Notice { title, message } => render_notice(f, app, title, message),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Views", header_style)),
        kb("F1, t", "Team"),
        kb("F2, p", "Projects"),
        Line::raw(""),
        Line::from(Span::styled("  Cards", header_style)),
        kb("←↑↓→, hjkl", "Move focus"),
        kb("Enter", "Expand focused card"),
        kb("PgUp/PgDn", "Scroll the page"),
        Line::raw(""),
        Line::from(Span::styled("  Expanded card", header_style)),
        kb("Esc", "Close expanded card"),
        kb("y", "Copy email / link"),
        kb("[x]", "Close (click)"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("r", "Reload roster"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Click", "Expand card / close outside"),
        kb("Wheel", "Scroll the page"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
            Span::styled(
                if app.mouse_enabled { "  |  Mouse: on" } else { "  |  Mouse: off" },
                desc_style,
            ),
        ]),
    ]);

    let height = content.height() as u16 + 2;
    let area = centered_rect(46, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_notice(f: &mut Frame, app: &App, title: &str, message: &str) {
    let area = centered_rect(60, 7, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(message)
        .style(Style::default().bg(app.theme.background).fg(app.theme.foreground))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error))
                .border_type(app.theme.border_type)
                .title(format!(" {} ", title))
                .title_bottom(Line::from(" Enter to dismiss ").centered()),
        );

    f.render_widget(paragraph, area);
}
