//! Capable Tic-Tac-Toe - terminal driver

#![warn(missing_docs)]

use anyhow::Result;
use capable_tictactoe_cli::{Cli, Command, DriverConfig, OutputFormat, run_play, run_replay};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let config = DriverConfig::load_or_default(&cli.config)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!("Starting interactive game");
            run_play(&config, format, std::io::stdin().lock(), &mut out)
        }
        Command::Replay { positions } => run_replay(&config, format, &positions, &mut out),
    }
}
