//! Terminal driver for the capability-based tic-tac-toe engine.
//!
//! The driver keeps one current [`MoveResult`](capable_tictactoe::MoveResult),
//! maps each typed cell to the matching capability, and renders markers
//! and status text. Engine calls are logged through `tracing` via the
//! engine's logging decorator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod render;
mod session;

pub use app::{OutputFormat, run_play, run_replay};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DriverConfig, Markers};
pub use input::{HELP, Input, InputError, parse_input, parse_position};
pub use render::{Frame, marker, render, render_grid, render_json, status_text};
pub use session::{LogHistory, Session};
