//! Tic-Tac-Toe - launcher
//!
//! Chooses between the console loop and the terminal widget interface.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use crossterm::tty::IsTty;
use std::io;
use tictactoe::{ConsoleDriver, GameDriver, TuiDriver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui) {
        Command::Console => run_console(),
        Command::Tui => run_tui(),
    }
}

/// Run the console front-end
fn run_console() -> Result<()> {
    // Logs go to stderr; the game itself owns stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    info!("Starting console front-end");

    let stdin = io::stdin();
    let mut driver = ConsoleDriver::new(stdin.lock(), io::stdout());
    driver.run()
}

/// Run the terminal widget front-end, falling back to the console
/// when no interactive terminal is attached
fn run_tui() -> Result<()> {
    if !io::stdout().is_tty() {
        warn!("Terminal UI not available, running console front-end");
        eprintln!("Terminal UI not available. Running console version...");
        return run_console();
    }

    let mut driver = TuiDriver::new();
    driver.run()
}
