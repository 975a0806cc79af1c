//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// State of a single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CellState {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a player.
    Played(Player),
}

impl CellState {
    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Returns the player occupying the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Played(player) => Some(player),
        }
    }
}
