//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-Tac-Toe - two-player game with console and terminal widget front-ends
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Front-end to run (defaults to the terminal widget interface)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front-ends
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal widget interface
    Tui,

    /// Play in the plain console loop
    Console,
}
