//! Play and replay loops over a [`Session`].

use crate::config::DriverConfig;
use crate::input::{HELP, Input, parse_input, parse_position};
use crate::render::{render, render_json};
use crate::session::Session;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Output style for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 3x3 text grid and status line.
    #[default]
    Text,
    /// One JSON object per snapshot.
    Json,
}

fn show(
    out: &mut impl Write,
    session: &Session,
    config: &DriverConfig,
    format: OutputFormat,
) -> Result<()> {
    let current = session.current();
    match format {
        OutputFormat::Text => writeln!(out, "{}\n", render(current, config.markers()))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(current)?)?,
    }
    Ok(())
}

/// Interactive loop: reads one command per line until `quit` or EOF.
#[instrument(skip_all)]
pub fn run_play(
    config: &DriverConfig,
    format: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::new(*config.log_history());
    info!("Interactive session started");
    show(out, &session, config, format)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Ok(Input::Select(pos)) => {
                if session.select(pos) {
                    show(out, &session, config, format)?;
                } else {
                    writeln!(out, "{} cannot be played now", pos)?;
                }
            }
            Ok(Input::NewGame) => {
                session.new_game();
                show(out, &session, config, format)?;
            }
            Ok(Input::ShowLog) => {
                for entry in session.log() {
                    writeln!(out, "{}", entry)?;
                }
            }
            Ok(Input::Help) => writeln!(out, "{}", HELP)?,
            Ok(Input::Quit) => break,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    info!("Interactive session ended");
    Ok(())
}

/// Plays `positions` in order from a new game and prints the final snapshot.
///
/// Positions with no matching capability are skipped, as a click on a
/// taken cell would be.
#[instrument(skip(config, out))]
pub fn run_replay(
    config: &DriverConfig,
    format: OutputFormat,
    positions: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::new(*config.log_history());

    for token in positions {
        let Some(pos) = parse_position(token) else {
            bail!("Unknown position {:?}", token);
        };
        if !session.select(pos) {
            warn!(%pos, "Skipping move with no capability");
        }
    }

    show(out, &session, config, format)
}
