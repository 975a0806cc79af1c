//! Win detection.

use super::super::{Board, CellState, Player, Position};

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::LEFT_TOP, Position::HCENTER_TOP, Position::RIGHT_TOP],
    [
        Position::LEFT_VCENTER,
        Position::HCENTER_VCENTER,
        Position::RIGHT_VCENTER,
    ],
    [
        Position::LEFT_BOTTOM,
        Position::HCENTER_BOTTOM,
        Position::RIGHT_BOTTOM,
    ],
    // Columns
    [Position::LEFT_TOP, Position::LEFT_VCENTER, Position::LEFT_BOTTOM],
    [
        Position::HCENTER_TOP,
        Position::HCENTER_VCENTER,
        Position::HCENTER_BOTTOM,
    ],
    [
        Position::RIGHT_TOP,
        Position::RIGHT_VCENTER,
        Position::RIGHT_BOTTOM,
    ],
    // Diagonals
    [
        Position::LEFT_TOP,
        Position::HCENTER_VCENTER,
        Position::RIGHT_BOTTOM,
    ],
    [
        Position::RIGHT_TOP,
        Position::HCENTER_VCENTER,
        Position::LEFT_BOTTOM,
    ],
];

/// Returns true if `player` holds all three cells of any winning line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = CellState::Played(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the player holding a winning line, if any.
///
/// X is checked before O. A board where both hold a line cannot come
/// from legal play.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}
