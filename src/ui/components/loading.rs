//! Loading placeholder component.
//!
//! While the dataset is in flight the table area shows a skeleton of
//! placeholder rows with an animated spinner above them.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph used to draw skeleton rows.
const SKELETON_GLYPH: char = '░';

/// A loading indicator with an animated spinner and skeleton rows.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message to display next to the spinner.
    message: String,
    /// Current spinner frame index.
    spinner_state: usize,
    /// Number of placeholder rows.
    skeleton_rows: usize,
    /// Whether the indicator is active.
    active: bool,
}

impl LoadingIndicator {
    /// Create a loading indicator with a message and a number of skeleton rows.
    pub fn new(message: impl Into<String>, skeleton_rows: usize) -> Self {
        Self {
            message: message.into(),
            spinner_state: 0,
            skeleton_rows,
            active: false,
        }
    }

    /// Start the indicator.
    pub fn start(&mut self) {
        self.active = true;
        self.spinner_state = 0;
    }

    /// Stop the indicator.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance the spinner animation. Called on each tick.
    pub fn tick(&mut self) {
        if self.active {
            self.spinner_state = (self.spinner_state + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_state]
    }

    /// Spinner and message, or an empty string when inactive.
    pub fn text(&self) -> String {
        if self.active {
            format!("{} {}", self.spinner_frame(), self.message)
        } else {
            String::new()
        }
    }

    /// Placeholder lines, one per skeleton row, sized to `width`.
    pub fn skeleton_lines(&self, width: u16) -> Vec<Line<'static>> {
        let bar: String = std::iter::repeat(SKELETON_GLYPH)
            .take(width as usize)
            .collect();
        (0..self.skeleton_rows)
            .map(|_| Line::styled(bar.clone(), Style::default().fg(Color::DarkGray)))
            .collect()
    }

    /// Render the spinner line and the skeleton rows.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.active {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let spinner = Paragraph::new(self.text())
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(spinner, chunks[0]);

        // One blank line between skeleton rows, like table row spacing.
        let mut lines = Vec::with_capacity(self.skeleton_rows * 2);
        for line in self.skeleton_lines(chunks[1].width.saturating_sub(2)) {
            lines.push(line);
            lines.push(Line::raw(""));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_indicator_new() {
        let loader = LoadingIndicator::new("Loading projects...", 5);
        assert_eq!(loader.message, "Loading projects...");
        assert!(!loader.active);
    }

    #[test]
    fn test_loading_indicator_start_stop() {
        let mut loader = LoadingIndicator::new("Loading", 5);
        loader.start();
        assert!(loader.active);
        loader.stop();
        assert!(!loader.active);
    }

    #[test]
    fn test_loading_indicator_tick() {
        let mut loader = LoadingIndicator::new("Loading", 5);
        loader.start();

        let initial_frame = loader.spinner_frame();
        loader.tick();
        assert_ne!(initial_frame, loader.spinner_frame());
    }

    #[test]
    fn test_loading_indicator_tick_inactive() {
        let mut loader = LoadingIndicator::new("Loading", 5);
        loader.tick();
        assert_eq!(loader.spinner_state, 0);
    }

    #[test]
    fn test_loading_indicator_tick_wraps() {
        let mut loader = LoadingIndicator::new("Loading", 5);
        loader.start();
        for _ in 0..SPINNER_FRAMES.len() {
            loader.tick();
        }
        assert_eq!(loader.spinner_state, 0);
    }

    #[test]
    fn test_loading_indicator_text() {
        let mut loader = LoadingIndicator::new("Loading projects...", 5);
        assert!(loader.text().is_empty());
        loader.start();
        assert!(loader.text().ends_with("Loading projects..."));
    }

    #[test]
    fn test_skeleton_lines() {
        let loader = LoadingIndicator::new("Loading", 5);
        let lines = loader.skeleton_lines(10);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].width(), 10);
    }
}
