mod app;
mod cli;
mod config;
mod runtime;
mod store;
mod test_data;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use horas_widget::AmbientFlags;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Commands};
use config::HorasConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = HorasConfig::load()?;
    init_tracing()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_tui(&config).await,
        Commands::Dev => {
            store::seed_dev_snapshot(&config.snapshot_path()?)?;
            run_tui(&config).await
        }
        Commands::Once => render_once(&config),
        Commands::ConfigPath => {
            let path = HorasConfig::config_path()?;
            if !path.exists() {
                HorasConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(config: &HorasConfig) -> Result<()> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// One-shot render for companion-app debugging: every instance's template
/// goes to stdout as JSON, then we exit.
fn render_once(config: &HorasConfig) -> Result<()> {
    let snapshot = store::load_snapshot(&config.snapshot_path()?);
    let ambient = AmbientFlags {
        dark_mode: config.dark_mode,
    };

    for id in &config.instances {
        let template = horas_widget::render(&snapshot, ambient);
        println!("{}:", id);
        println!("{}", serde_json::to_string_pretty(&template)?);
    }
    Ok(())
}

/// Log to a file so the alternate screen stays clean.
fn init_tracing() -> Result<()> {
    let path = HorasConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
