//! Parsing of player input lines.

use capable_tictactoe::Position;
use derive_more::{Display, Error};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Select a cell.
    Select(Position),
    /// Start a new game.
    NewGame,
    /// Show the engine log.
    ShowLog,
    /// Show the help text.
    Help,
    /// Leave the driver.
    Quit,
}

/// Input line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?}; type 'help' for commands", line)]
pub struct InputError {
    /// The rejected line.
    pub line: String,
}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  1-9           play a cell, numbered left to right, top to bottom
  <name>        play a cell by name, e.g. LeftTop, HCenterVCenter
  new           start a new game
  log           show the engine log, newest first
  help          show this text
  quit          leave";

/// Parses a cell from a digit (1-9, canonical order) or a position name.
pub fn parse_position(token: &str) -> Option<Position> {
    let token = token.trim();
    if let Ok(num) = token.parse::<usize>() {
        return num.checked_sub(1).and_then(Position::from_index);
    }
    token.parse().ok()
}

/// Parses one line of input.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "new" | "n" => Ok(Input::NewGame),
        "log" | "l" => Ok(Input::ShowLog),
        "help" | "h" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        _ => parse_position(trimmed)
            .map(Input::Select)
            .ok_or_else(|| InputError {
                line: trimmed.to_string(),
            }),
    }
}
