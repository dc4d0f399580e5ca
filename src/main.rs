//! Kicktable - a terminal table of crowdfunding projects.
//!
//! Fetches the project dataset once, then pages through it five rows at a
//! time with a compact numbered pager.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod pagination;
mod tasks;
mod ui;

use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::api::ProjectClient;
use crate::app::App;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::events::EventHandler;
use crate::tasks::TaskSpawner;
use crate::ui::TableView;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "kicktable", version, about)]
struct Cli {
    /// Dataset URL (overrides the config file and KICKTABLE_DATA_URL).
    #[arg(long)]
    url: Option<String>,

    /// Path to a config file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print one page as plain text instead of starting the TUI.
    #[arg(long)]
    plain: bool,

    /// Page to print in plain mode.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = run(cli).await;
    if let Err(ref e) = result {
        error!(error = %e, "Exiting with error");
    }
    logging::shutdown();

    result.map_err(|e| anyhow::anyhow!(e.user_message()))
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    info!(url = %config.data_url(), "Configuration loaded");

    let client = ProjectClient::new(config.data_url(), config.request_timeout())?;

    if cli.plain || !io::stdout().is_terminal() {
        return run_plain(&client, cli.page).await;
    }

    run_tui(&config, client).await
}

/// Resolve configuration from file, environment and flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let url = cli.url.as_deref();
    let config = match &cli.config {
        Some(path) => Config::load_from(path, url)?,
        None => Config::load(url)?,
    };
    Ok(config)
}

/// Fetch the dataset and print a single page to stdout.
async fn run_plain(client: &ProjectClient, page: usize) -> Result<()> {
    let mut view = TableView::new();
    view.load(client).await;

    if let Some(message) = view.error() {
        return Err(AppError::other(message));
    }

    if !view.go_to_page(page) {
        info!(
            page,
            shown = view.current_page(),
            "Requested page out of range"
        );
    }

    print!("{}", view.to_plain_text());
    Ok(())
}

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::terminal(e.to_string()))?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive table until the user quits.
async fn run_tui(config: &Config, client: ProjectClient) -> Result<()> {
    install_panic_hook();
    let mut guard = TerminalGuard::new()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let spawner = TaskSpawner::new(tx);

    let mut app = App::new();
    app.start_load(&spawner, client);

    let events = EventHandler::with_tick_rate(config.tick_rate());

    loop {
        guard
            .terminal
            .draw(|frame| app.view(frame))
            .map_err(|e| AppError::terminal(format!("Failed to draw frame: {}", e)))?;

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }

        let event = tokio::task::block_in_place(|| events.next())?;
        app.update(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["kicktable"]);
        assert_eq!(cli.url, None);
        assert_eq!(cli.config, None);
        assert!(!cli.plain);
        assert_eq!(cli.page, 1);
    }

    #[test]
    fn test_cli_plain_page() {
        let cli = Cli::parse_from(["kicktable", "--plain", "--page", "4", "--url", "http://localhost/p.json"]);
        assert!(cli.plain);
        assert_eq!(cli.page, 4);
        assert_eq!(cli.url.as_deref(), Some("http://localhost/p.json"));
    }

    #[test]
    #[serial_test::serial]
    fn test_load_config_rejects_bad_url_flag() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "kicktable".to_string(),
            "--config".to_string(),
            dir.path().join("missing.toml").display().to_string(),
            "--url".to_string(),
            "ftp://example.com".to_string(),
        ]);
        let err = load_config(&cli).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    #[serial_test::serial]
    fn test_url_flag_wins_over_bad_env_url() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(config::DATA_URL_ENV, "ftp://bad.example/x.json");
        let cli = Cli::parse_from([
            "kicktable".to_string(),
            "--config".to_string(),
            dir.path().join("missing.toml").display().to_string(),
            "--url".to_string(),
            "https://example.com/good.json".to_string(),
        ]);
        let result = load_config(&cli);
        std::env::remove_var(config::DATA_URL_ENV);

        assert_eq!(result.unwrap().data_url(), "https://example.com/good.json");
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
