//! Project table view.
//!
//! Owns the fetched projects and the current page. The view goes through
//! `Loading` to either `Ready` or `Error` exactly once; there is no way back
//! from `Error`. Navigation requests are validated here and invalid targets
//! are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use tracing::{debug, info, warn};

use crate::api::{Project, ProjectSource};
use crate::events::KeyContext;
use crate::pagination::{
    page_range, total_pages, visible_pages, PageMarker, PAGE_DELTA, PAGE_SIZE,
};
use crate::ui::components::{
    pager_items, plain_pager_line, render_pager, LoadingIndicator, PagerItem, PagerPosition,
};
use crate::ui::format::{format_amount, format_percentage};

/// Title shown above the table.
pub const TABLE_TITLE: &str = "Kickstarter Projects";

/// Column headers.
const HEADERS: [&str; 3] = ["S.No.", "Percentage Funded", "Amount Pledged"];

/// Longest page number accepted from digit entry.
const MAX_PAGE_INPUT_DIGITS: usize = 9;

/// Loading lifecycle of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The fetch has not completed yet.
    Loading,
    /// The projects were fetched.
    Ready(Vec<Project>),
    /// The fetch failed; carries the message shown to the user.
    Error(String),
}

/// Which part of the view receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The table container.
    #[default]
    Table,
    /// The pager buttons.
    Pager,
}

/// Action resulting from table input, for the app to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// The current page changed to the given page.
    PageChanged(usize),
}

/// The project table view.
#[derive(Debug)]
pub struct TableView {
    /// Dataset lifecycle.
    state: LoadState,
    /// Whether the single fetch has been started.
    load_started: bool,
    /// Current page, 1-based.
    current_page: usize,
    /// Where input focus is.
    focus: Focus,
    /// Index into the pager items while the pager has focus.
    pager_cursor: usize,
    /// Digits typed for a direct page jump.
    page_input: String,
    /// Skeleton and spinner shown while loading.
    loading: LoadingIndicator,
}

impl TableView {
    /// Create a new view in the loading state.
    pub fn new() -> Self {
        let mut loading = LoadingIndicator::new("Loading projects...", PAGE_SIZE);
        loading.start();

        Self {
            state: LoadState::Loading,
            load_started: false,
            current_page: 1,
            focus: Focus::Table,
            pager_cursor: 0,
            page_input: String::new(),
            loading,
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetch the dataset from `source` and settle the load state.
    ///
    /// Only the first call fetches; later calls return without touching the
    /// source.
    pub async fn load<S: ProjectSource>(&mut self, source: &S) {
        if !self.begin_load() {
            return;
        }
        let result = source.fetch_projects().await.map_err(|e| e.to_string());
        self.finish_load(result);
    }

    /// Mark the fetch as started.
    ///
    /// Returns `false` if a fetch was already started, in which case the
    /// caller must not fetch again.
    pub fn begin_load(&mut self) -> bool {
        if self.load_started {
            warn!("Dataset load already started, ignoring");
            return false;
        }
        self.load_started = true;
        debug!("Dataset load started");
        true
    }

    /// Settle the load state with the fetch result.
    ///
    /// Ignored unless the view is still loading.
    pub fn finish_load(&mut self, result: Result<Vec<Project>, String>) {
        if self.state != LoadState::Loading {
            warn!("Dataset load already finished, ignoring result");
            return;
        }

        self.loading.stop();
        self.state = match result {
            Ok(projects) => {
                info!(
                    count = projects.len(),
                    pages = total_pages(projects.len(), PAGE_SIZE),
                    "Projects loaded"
                );
                LoadState::Ready(projects)
            }
            Err(message) => {
                warn!(error = %message, "Failed to load projects");
                LoadState::Error(message)
            }
        };
    }

    /// Whether the fetch is still pending.
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// The error message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// All fetched projects; empty unless ready.
    pub fn projects(&self) -> &[Project] {
        match &self.state {
            LoadState::Ready(projects) => projects,
            _ => &[],
        }
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// The current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        total_pages(self.projects().len(), PAGE_SIZE)
    }

    /// Index of the first row on the current page.
    pub fn start_index(&self) -> usize {
        page_range(self.current_page, PAGE_SIZE, self.projects().len()).start
    }

    /// The rows on the current page.
    pub fn current_slice(&self) -> &[Project] {
        let projects = self.projects();
        &projects[page_range(self.current_page, PAGE_SIZE, projects.len())]
    }

    /// The page markers for the pager.
    pub fn markers(&self) -> Vec<PageMarker> {
        visible_pages(self.current_page, self.total_pages(), PAGE_DELTA)
    }

    /// Go to `target`.
    ///
    /// Does nothing and returns `false` if `target` is outside
    /// `1..=total_pages`. Otherwise sets the page, moves focus back to the
    /// table and returns `true`.
    pub fn go_to_page(&mut self, target: usize) -> bool {
        let total = self.total_pages();
        if target < 1 || target > total {
            debug!(target, total, "Ignoring out-of-range page request");
            return false;
        }

        self.current_page = target;
        self.focus = Focus::Table;
        debug!(page = target, "Page changed");
        true
    }

    /// Go to the previous page, if any.
    pub fn previous_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(target) => self.go_to_page(target),
            None => false,
        }
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Whether the previous button is enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next button is enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// The position shown by the pager.
    pub fn pager_position(&self) -> PagerPosition {
        PagerPosition {
            current: self.current_page,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    // ------------------------------------------------------------------
    // Focus and input
    // ------------------------------------------------------------------

    /// The key hint context for the status bar.
    pub fn key_context(&self) -> KeyContext {
        match (&self.state, self.focus) {
            (LoadState::Loading, _) => KeyContext::Loading,
            (LoadState::Error(_), _) => KeyContext::Error,
            (LoadState::Ready(_), Focus::Table) => KeyContext::Table,
            (LoadState::Ready(_), Focus::Pager) => KeyContext::Pager,
        }
    }

    /// Move focus to the pager with the cursor on the current page.
    pub fn focus_pager(&mut self) {
        let items = pager_items(&self.markers());
        self.pager_cursor = items
            .iter()
            .position(|item| *item == PagerItem::Marker(PageMarker::Page(self.current_page)))
            .unwrap_or(0);
        self.focus = Focus::Pager;
    }

    /// Move focus back to the table.
    pub fn focus_table(&mut self) {
        self.focus = Focus::Table;
    }

    /// The pager item under the cursor, if the pager has focus.
    pub fn selected_pager_item(&self) -> Option<PagerItem> {
        if self.focus != Focus::Pager {
            return None;
        }
        pager_items(&self.markers()).get(self.pager_cursor).copied()
    }

    /// Move the pager cursor to the nearest enabled item on either side.
    fn move_pager_cursor(&mut self, forward: bool) {
        let items = pager_items(&self.markers());
        let position = self.pager_position();

        let next = if forward {
            (self.pager_cursor + 1..items.len()).find(|&i| items[i].is_enabled(position))
        } else {
            (0..self.pager_cursor)
                .rev()
                .find(|&i| items[i].is_enabled(position))
        };

        if let Some(index) = next {
            self.pager_cursor = index;
        }
    }

    /// Activate the pager item under the cursor.
    fn activate_pager_item(&mut self) -> bool {
        let target = self
            .selected_pager_item()
            .and_then(|item| item.target(self.pager_position()));
        match target {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Handle a key press.
    ///
    /// Returns an action when the page changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<TableAction> {
        if !matches!(self.state, LoadState::Ready(_)) {
            return None;
        }

        let before = self.current_page;
        let changed = match self.focus {
            Focus::Table => self.handle_table_key(key),
            Focus::Pager => self.handle_pager_key(key),
        };

        (changed && self.current_page != before).then_some(TableAction::PageChanged(self.current_page))
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() => {
                if self.page_input.len() < MAX_PAGE_INPUT_DIGITS {
                    self.page_input.push(c);
                }
                false
            }
            (KeyCode::Backspace, _) => {
                self.page_input.pop();
                false
            }
            (KeyCode::Enter, _) if !self.page_input.is_empty() => {
                let input = std::mem::take(&mut self.page_input);
                // Overlong input cannot name a real page.
                let target = input.parse::<usize>().unwrap_or(0);
                self.go_to_page(target)
            }
            (KeyCode::Esc, _) if !self.page_input.is_empty() => {
                self.page_input.clear();
                false
            }
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                self.previous_page()
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => self.next_page(),
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => self.first_page(),
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => self.last_page(),
            (KeyCode::Tab, _) => {
                self.page_input.clear();
                self.focus_pager();
                false
            }
            _ => false,
        }
    }

    fn handle_pager_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
                self.move_pager_cursor(false);
                false
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                self.move_pager_cursor(true);
                false
            }
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => self.activate_pager_item(),
            (KeyCode::Tab, _) | (KeyCode::Esc, _) => {
                self.focus_table();
                false
            }
            _ => false,
        }
    }

    /// Whether the view wants `Esc` for itself (pager focus or pending
    /// digits) instead of letting the app quit.
    pub fn captures_escape(&self) -> bool {
        self.focus == Focus::Pager || !self.page_input.is_empty()
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.loading.tick();
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Short page position for the status bar.
    pub fn status_text(&self) -> String {
        match &self.state {
            LoadState::Ready(projects) if !projects.is_empty() => {
                let mut status = format!("Page {} of {}", self.current_page, self.total_pages());
                if !self.page_input.is_empty() {
                    status = format!("Go to: {}_  {}", self.page_input, status);
                }
                status
            }
            LoadState::Ready(_) => "No projects".to_string(),
            _ => String::new(),
        }
    }

    /// Render the view.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.state {
            LoadState::Loading => self.loading.render(frame, area),
            LoadState::Error(message) => render_error(frame, area, message),
            LoadState::Ready(_) => self.render_ready(frame, area),
        }
    }

    fn render_ready(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(PAGE_SIZE as u16 + 3), Constraint::Length(3)])
            .split(area);

        self.render_table(frame, chunks[0]);

        let items = pager_items(&self.markers());
        let selected = (self.focus == Focus::Pager).then_some(self.pager_cursor);
        render_pager(
            frame,
            chunks[1],
            &items,
            self.pager_position(),
            selected,
        );
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Table {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", TABLE_TITLE));

        if self.projects().is_empty() {
            let empty = Paragraph::new("No projects to display.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.row_cells().into_iter().map(|cells| {
            Row::new(cells.into_iter().map(Cell::from)).style(Style::default().fg(Color::White))
        });

        let widths = [
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ];

        let table = Table::new(rows, widths).header(header).block(block);
        frame.render_widget(table, area);
    }

    /// Cell text for each row of the current page.
    fn row_cells(&self) -> Vec<[String; 3]> {
        let start = self.start_index();
        self.current_slice()
            .iter()
            .enumerate()
            .map(|(offset, project)| {
                [
                    (start + offset + 1).to_string(),
                    format_percentage(project.percentage_funded),
                    format_amount(project.amount_pledged),
                ]
            })
            .collect()
    }

    /// Plain-text rendering of the view, for non-interactive output.
    pub fn to_plain_text(&self) -> String {
        match &self.state {
            LoadState::Loading => "Loading projects...\n".to_string(),
            LoadState::Error(message) => format!("Error: {}\n", message),
            LoadState::Ready(_) => {
                let mut rows = vec![HEADERS.map(String::from)];
                rows.extend(self.row_cells());

                let mut widths = [0usize; 3];
                for row in &rows {
                    for (width, cell) in widths.iter_mut().zip(row) {
                        *width = (*width).max(cell.chars().count());
                    }
                }

                let mut out = format!("{}\n\n", TABLE_TITLE);
                for row in &rows {
                    let line = row
                        .iter()
                        .zip(widths)
                        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                        .collect::<Vec<_>>()
                        .join("  ");
                    out.push_str(line.trim_end());
                    out.push('\n');
                }

                let items = pager_items(&self.markers());
                out.push('\n');
                out.push_str(&plain_pager_line(
                    &items,
                    self.pager_position(),
                ));
                out.push('\n');
                out
            }
        }
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the load failure as an alert.
fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::raw(""),
        Line::styled(message.to_string(), Style::default().fg(Color::Red)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error "),
        );
    frame.render_widget(paragraph, area);
}
