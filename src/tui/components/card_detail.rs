//! Detail overlay for the expanded card
//!
//! Dims the whole screen, then draws a centered panel with the full
//! payload and a `[x]` close control in the top border. The rectangles of
//! the panel and the close control are handed back so the controller can
//! hit-test pointer presses against exactly what was drawn.

use crate::deck::TransitionKey;
use crate::roster::{CardContent, CardRecord};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CLOSE_LABEL: &str = " [x] ";
const LABEL_WIDTH: usize = 10;

/// Where the overlay landed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub panel: Rect,
    pub close: Rect,
}

/// Calculate centered rect for the panel
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn detail_lines<'a, P: CardContent>(payload: &'a P, ctx: &RenderContext) -> Vec<Line<'a>> {
    let theme = ctx.theme;
    let label_style = Style::default().fg(theme.muted);
    let value_style = Style::default().fg(theme.foreground);

    let mut lines = Vec::new();
    if let Some(subtitle) = payload.subtitle() {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default()
                .fg(theme.card_subtitle)
                .add_modifier(Modifier::BOLD),
        )));
    }
    for summary in payload.summary() {
        lines.push(Line::from(Span::styled(summary, value_style)));
    }
    lines.push(Line::raw(""));

    for (label, value) in payload.detail_fields() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
            Span::styled(value, value_style),
        ]));
    }
    // Image references are shown as-is; fetching them is not our job
    if let Some(image) = payload.image() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", "Photo", width = LABEL_WIDTH), label_style),
            Span::styled(image, Style::default().fg(theme.accent)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Esc close · y copy · click outside to close",
        Style::default().fg(theme.muted),
    )));
    lines
}

/// Draw the overlay for `record` over `screen`
pub fn render<P: CardContent>(
    f: &mut Frame,
    screen: Rect,
    record: &CardRecord<P>,
    key: &TransitionKey,
    ctx: &RenderContext,
) -> DetailLayout {
    let theme = ctx.theme;

    // Backdrop: everything already drawn this frame fades behind the panel
    f.buffer_mut()
        .set_style(screen, Style::default().add_modifier(Modifier::DIM));

    let lines = detail_lines(&record.payload, ctx);
    let width = Breakpoint::from_width(screen.width).detail_width(screen.width);
    let height = (lines.len() as u16 + 2).min(screen.height.saturating_sub(2).max(3));
    let target = centered_rect(width, height, screen);
    let panel = ctx.morph.panel_rect(key, target).intersection(screen);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background).fg(theme.foreground))
        .title(Span::styled(
            format!(" {} ", record.payload.headline()),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(CLOSE_LABEL).right_aligned());

    f.render_widget(Clear, panel);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        panel,
    );

    // The right-aligned title ends one cell before the top-right corner
    let label_width = CLOSE_LABEL.len() as u16;
    let close = Rect::new(
        panel.right().saturating_sub(label_width + 1),
        panel.y,
        label_width,
        1,
    )
    .intersection(panel);

    DetailLayout { panel, close }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::MorphLayer;
    use crate::roster::{CardId, MemberProfile};
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn member() -> CardRecord<MemberProfile> {
        CardRecord::new(
            "srinjinee",
            MemberProfile {
                name: "Srinjinee Mitra".to_string(),
                role: "Team Member".to_string(),
                email: "srinjinee@example.org".to_string(),
                photo: "photos/srinjinee.jpg".to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn panel_shows_payload_and_close_control() {
        let record = member();
        let key = TransitionKey::new("team", &CardId::new("srinjinee"));
        let theme = Theme::default();
        let morph = MorphLayer::new(0);
        let ctx = RenderContext::new(&theme, &morph);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut layout = None;
        terminal
            .draw(|f| {
                let screen = f.area();
                layout = Some(render(f, screen, &record, &key, &ctx));
            })
            .unwrap();
        let layout = layout.unwrap();
        let buffer = terminal.backend().buffer();

        assert_eq!(layout.panel.width, 64);
        assert!(layout.panel.x > 0 && layout.panel.y > 0);

        let top = row_text(buffer, layout.panel.y);
        assert!(top.contains("Srinjinee Mitra"));
        let close_text: String = (layout.close.x..layout.close.right())
            .map(|x| buffer[(x, layout.close.y)].symbol().to_string())
            .collect();
        assert_eq!(close_text, CLOSE_LABEL);

        let body: String = (layout.panel.y..layout.panel.bottom())
            .map(|y| row_text(buffer, y))
            .collect();
        assert!(body.contains("srinjinee@example.org"));
        assert!(body.contains("photos/srinjinee.jpg"));
    }

    #[test]
    fn backdrop_dims_outside_the_panel() {
        let record = member();
        let key = TransitionKey::new("team", &record.id);
        let theme = Theme::default();
        let morph = MorphLayer::new(0);
        let ctx = RenderContext::new(&theme, &morph);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                let screen = f.area();
                render(f, screen, &record, &key, &ctx);
            })
            .unwrap();

        let corner = &terminal.backend().buffer()[(0, 0)];
        assert!(corner.modifier.contains(Modifier::DIM));
    }
}
