//! Main application state and event loop logic.
//!
//! Follows The Elm Architecture: `update` consumes events and background
//! messages, `view` renders the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, trace};

use crate::api::ProjectSource;
use crate::events::{Event, KeyContext};
use crate::tasks::{ApiMessage, TaskSpawner};
use crate::ui::{render_help, render_status_bar, TableAction, TableView, TABLE_TITLE};

/// Top-level screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The project table is shown.
    #[default]
    Table,
    /// The help overlay is shown on top of the table.
    Help,
    /// The application is exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current screen state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The project table.
    table_view: TableView,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        debug!("Creating new application instance");
        Self {
            state: AppState::Table,
            should_quit: false,
            table_view: TableView::new(),
        }
    }

    /// Start the single dataset fetch on a background task.
    ///
    /// Does nothing if the fetch was already started.
    pub fn start_load<S>(&mut self, spawner: &TaskSpawner, source: S)
    where
        S: ProjectSource + Send + Sync + 'static,
    {
        if self.table_view.begin_load() {
            info!("Loading projects");
            spawner.spawn_fetch_projects(source);
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a message from a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::ProjectsFetched(result) => self.table_view.finish_load(result),
        }
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.table_view.tick(),
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.quit();
            return;
        }

        match self.state {
            AppState::Help => {
                if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.state = AppState::Table;
                }
            }
            AppState::Table => match key_event.code {
                KeyCode::Char('q') if key_event.modifiers == KeyModifiers::NONE => self.quit(),
                KeyCode::Esc if !self.table_view.captures_escape() => self.quit(),
                KeyCode::Char('?') => self.state = AppState::Help,
                _ => {
                    if let Some(TableAction::PageChanged(page)) =
                        self.table_view.handle_input(key_event)
                    {
                        debug!(page, "Showing page");
                    }
                }
            },
            AppState::Exiting => {}
        }
    }

    /// Render the application UI.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        render_header(frame, chunks[0]);
        self.table_view.render(frame, chunks[1]);
        render_status_bar(
            frame,
            chunks[2],
            self.key_context(),
            &self.table_view.status_text(),
        );

        if self.state == AppState::Help {
            render_help(frame, area);
        }
    }

    /// The key hint context for the status bar.
    fn key_context(&self) -> KeyContext {
        match self.state {
            AppState::Help => KeyContext::Help,
            _ => self.table_view.key_context(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the application header.
fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TABLE_TITLE)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(title, area);
}
