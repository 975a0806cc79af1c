//! Tie detection.

use super::super::{Board, CellState, Player};
use super::win::has_won;

/// Checks if every cell is played.
pub fn is_full(board: &Board) -> bool {
    board.count(CellState::Empty) == 0
}

/// A full board on which neither player holds a line.
///
/// Callers check for a win first; a win always takes precedence.
pub fn is_tied(board: &Board) -> bool {
    is_full(board) && !has_won(board, Player::X) && !has_won(board, Player::O)
}
