//! Command-line interface for capable_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Capable Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "capable_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the driver config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "capable_tictactoe.toml")]
    pub config: PathBuf,

    /// Print each snapshot as JSON instead of a text grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Play a fixed sequence of cells and print the final board
    Replay {
        /// Cells to play in order, by number (1-9) or name (e.g. LeftTop)
        #[arg(required = true)]
        positions: Vec<String>,
    },
}
