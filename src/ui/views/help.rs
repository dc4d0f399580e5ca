//! Help overlay listing keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shortcut sections: (title, [(keys, description)]).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("← / h", "Previous page"),
            ("→ / l", "Next page"),
            ("g / Home", "First page"),
            ("G / End", "Last page"),
            ("0-9 Enter", "Go to page number"),
            ("Tab", "Focus the pager"),
        ],
    ),
    (
        "Pager",
        &[
            ("← / →", "Select a page button"),
            ("Enter", "Open the selected page"),
            ("Tab / Esc", "Back to the table"),
        ],
    ),
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// Width of the keys column.
const KEY_COLUMN_WIDTH: usize = 12;

/// Build the help text.
pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (title, bindings)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            format!("{}:", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        for (keys, description) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", keys, width = KEY_COLUMN_WIDTH),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(*description),
            ]));
        }
    }

    lines
}

/// Render the help overlay centered over `area`.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 48.min(area.width);
    let popup = centered_rect(width, height, area);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        ),
        popup,
    );
}

/// Create a centered rectangle.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lines_have_sections() {
        let text: Vec<String> = help_lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l == "Table:"));
        assert!(text.iter().any(|l| l == "Pager:"));
        assert!(text.iter().any(|l| l.contains("Previous page")));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }
}
