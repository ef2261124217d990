//! Quadrants - terminal client.
//!
//! Menus, board rendering, and the flat-file history store around the
//! pure `quadrants` engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod history;
mod input;
mod screen;
mod screens;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use controller::Controller;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use history::HistoryStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Quadrants - a two-player tile-claiming game in the terminal.
#[derive(Parser, Debug)]
#[command(name = "quadrants_tui")]
#[command(about = "Two-player quadrants in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the append-only history file.
    #[arg(long, default_value = "quad_history.txt")]
    history: PathBuf,

    /// Path to the log file.
    #[arg(long, default_value = "quadrants_tui.log")]
    log: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output never interferes with the TUI.
    let log_file = std::fs::File::create(&cli.log)
        .with_context(|| format!("Failed to create log file {}", cli.log.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting quadrants TUI");

    let history = HistoryStore::load(&cli.history);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = Controller::new(history).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
