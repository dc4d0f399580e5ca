//! Pager component.
//!
//! Renders the `Previous` button, the page markers and the `Next` button on
//! a single line. The pager itself holds no state; the table view owns the
//! current page and the pager cursor.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pagination::PageMarker;

/// The table position the pager reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerPosition {
    /// Current page, 1-based.
    pub current: usize,
    /// Whether the `Previous` button is enabled.
    pub has_previous: bool,
    /// Whether the `Next` button is enabled.
    pub has_next: bool,
}

/// One slot of the pager line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    /// The "Previous" button.
    Previous,
    /// A page number or ellipsis.
    Marker(PageMarker),
    /// The "Next" button.
    Next,
}

impl PagerItem {
    /// Text shown for this item.
    pub fn label(&self) -> String {
        match self {
            PagerItem::Previous => "Previous".to_string(),
            PagerItem::Marker(marker) => marker.to_string(),
            PagerItem::Next => "Next".to_string(),
        }
    }

    /// The page this item navigates to, or `None` if it is disabled or not
    /// interactive.
    pub fn target(&self, position: PagerPosition) -> Option<usize> {
        match self {
            PagerItem::Previous => position
                .has_previous
                .then(|| position.current.saturating_sub(1)),
            PagerItem::Next => position.has_next.then(|| position.current + 1),
            PagerItem::Marker(marker) => marker.page(),
        }
    }

    /// Whether the item can be activated.
    pub fn is_enabled(&self, position: PagerPosition) -> bool {
        self.target(position).is_some()
    }
}

/// Build the full pager line from the page markers.
pub fn pager_items(markers: &[PageMarker]) -> Vec<PagerItem> {
    std::iter::once(PagerItem::Previous)
        .chain(markers.iter().copied().map(PagerItem::Marker))
        .chain(std::iter::once(PagerItem::Next))
        .collect()
}

/// Styled pager line.
///
/// `selected` is the index of the item under the pager cursor, if the pager
/// has focus.
pub fn pager_line(
    items: &[PagerItem],
    position: PagerPosition,
    selected: Option<usize>,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }

        let mut style = match item {
            PagerItem::Marker(PageMarker::Ellipsis) => Style::default().fg(Color::DarkGray),
            PagerItem::Marker(PageMarker::Page(n)) if *n == position.current => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            _ if !item.is_enabled(position) => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::White),
        };

        if selected == Some(index) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
        }

        let label = match item {
            PagerItem::Marker(PageMarker::Page(_)) => format!(" {} ", item.label()),
            _ => item.label(),
        };
        spans.push(Span::styled(label, style));
    }

    Line::from(spans)
}

/// Plain-text pager line.
///
/// The current page is bracketed and disabled buttons are parenthesized,
/// e.g. `(Previous) [1] 2 3 ... 10 Next`.
pub fn plain_pager_line(items: &[PagerItem], position: PagerPosition) -> String {
    items
        .iter()
        .map(|item| match item {
            PagerItem::Marker(PageMarker::Page(n)) if *n == position.current => format!("[{}]", n),
            PagerItem::Previous | PagerItem::Next if !item.is_enabled(position) => {
                format!("({})", item.label())
            }
            _ => item.label(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the pager centered in a bordered block.
pub fn render_pager(
    frame: &mut Frame,
    area: Rect,
    items: &[PagerItem],
    position: PagerPosition,
    selected: Option<usize>,
) {
    let border_color = if selected.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let paragraph = Paragraph::new(pager_line(items, position, selected))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(" Pagination "),
        );

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{visible_pages, PageMarker::*};

    fn at(current: usize, total: usize) -> PagerPosition {
        PagerPosition {
            current,
            has_previous: current > 1,
            has_next: current < total,
        }
    }

    #[test]
    fn test_pager_items_wraps_markers() {
        let items = pager_items(&[Page(1), Ellipsis, Page(5)]);
        assert_eq!(
            items,
            vec![
                PagerItem::Previous,
                PagerItem::Marker(Page(1)),
                PagerItem::Marker(Ellipsis),
                PagerItem::Marker(Page(5)),
                PagerItem::Next,
            ]
        );
    }

    #[test]
    fn test_buttons_disabled_at_bounds() {
        assert!(!PagerItem::Previous.is_enabled(at(1, 10)));
        assert!(PagerItem::Next.is_enabled(at(1, 10)));
        assert!(PagerItem::Previous.is_enabled(at(10, 10)));
        assert!(!PagerItem::Next.is_enabled(at(10, 10)));
    }

    #[test]
    fn test_buttons_disabled_without_pages() {
        assert!(!PagerItem::Previous.is_enabled(at(1, 0)));
        assert!(!PagerItem::Next.is_enabled(at(1, 0)));
    }

    #[test]
    fn test_ellipsis_is_not_interactive() {
        assert_eq!(PagerItem::Marker(Ellipsis).target(at(5, 10)), None);
        assert_eq!(PagerItem::Marker(Page(7)).target(at(5, 10)), Some(7));
    }

    #[test]
    fn test_targets() {
        assert_eq!(PagerItem::Previous.target(at(5, 10)), Some(4));
        assert_eq!(PagerItem::Next.target(at(5, 10)), Some(6));
    }

    #[test]
    fn test_plain_pager_line() {
        let items = pager_items(&visible_pages(1, 10, 2));
        assert_eq!(
            plain_pager_line(&items, at(1, 10)),
            "(Previous) [1] 2 3 ... 10 Next"
        );

        let items = pager_items(&visible_pages(10, 10, 2));
        assert_eq!(
            plain_pager_line(&items, at(10, 10)),
            "Previous 1 ... 8 9 [10] (Next)"
        );
    }

    #[test]
    fn test_pager_line_contains_labels() {
        let items = pager_items(&visible_pages(5, 10, 2));
        let line = pager_line(&items, at(5, 10), None);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("Previous"));
        assert!(text.ends_with("Next"));
        assert!(text.contains(" 5 "));
        assert_eq!(text.matches("...").count(), 2);
    }

    #[test]
    fn test_pager_line_marks_selection() {
        let items = pager_items(&visible_pages(1, 3, 2));
        let line = pager_line(&items, at(1, 3), Some(2));
        // Spans alternate item/separator, so item 2 is span 4.
        assert!(line.spans[4]
            .style
            .add_modifier
            .contains(Modifier::REVERSED));
    }
}
