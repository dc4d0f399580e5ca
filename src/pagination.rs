//! Client-side pagination.
//!
//! Pages are 1-based. The pager never lists every page: it shows the first
//! and last page, a window of `delta` pages on each side of the current one,
//! and an ellipsis wherever pages were skipped.

use std::fmt;
use std::ops::Range;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Half-width of the numeric window around the current page.
pub const PAGE_DELTA: usize = 2;

/// A single unit of the pager display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A selectable page number.
    Page(usize),
    /// A non-interactive placeholder for skipped pages.
    Ellipsis,
}

impl PageMarker {
    /// The page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Number of pages needed to show `count` records.
///
/// Zero records means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Index range of the records shown on `page`.
///
/// The range is clamped to `count`, so the last page may be short, and a
/// page past the end yields an empty range.
pub fn page_range(page: usize, page_size: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Compute the page markers to display for `current` out of `total` pages.
///
/// The first and last page always appear (once) when there is at least one
/// page. With no pages the sequence is empty.
pub fn visible_pages(current: usize, total: usize, delta: usize) -> Vec<PageMarker> {
    match total {
        0 => return Vec::new(),
        1 => return vec![PageMarker::Page(1)],
        _ => {}
    }

    let window_start = current.saturating_sub(delta).max(2);
    let window_end = current.saturating_add(delta).min(total - 1);

    let mut markers = Vec::with_capacity(2 * delta + 5);
    markers.push(PageMarker::Page(1));

    if window_start > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    // An empty window (start > end) contributes nothing.
    markers.extend((window_start..=window_end).map(PageMarker::Page));

    if window_end < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total));

    markers
}
