//! Status bar component.
//!
//! Shows the key hints for the current input context on the left and a
//! short status (such as the page position) on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};

/// Render the status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, context: KeyContext, status: &str) {
    let status_width = (status.chars().count() as u16 + 2).min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(status_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(hint_spans(get_context_hints(context)))),
        chunks[0],
    );

    if !status.is_empty() {
        let status = Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        );
        frame.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
    }
}

/// Split a hint string into styled spans.
///
/// Bracketed keys like `[q]` are highlighted; everything else is dimmed.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    let mut rest = hints;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }

    spans
}
