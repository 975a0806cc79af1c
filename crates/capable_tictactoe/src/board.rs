//! Immutable 3x3 board keyed by [`Position`].

use super::position::Position;
use super::types::{CellState, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Attempted to play on a cell that is already taken.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already played by {}", pos, occupant)]
    CellOccupied {
        /// Target cell.
        pos: Position,
        /// Player already on that cell.
        occupant: Player,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Backed by a fixed array indexed by [`Position::index`], so all nine
/// cells are always present. Boards are values: [`Board::place`] returns
/// a new board and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    cells: [CellState; 9],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [CellState::Empty; 9],
        }
    }

    /// Returns the state of a cell.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns a new board with `pos` played by `player`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if `pos` is already played.
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, BoardError> {
        if let CellState::Played(occupant) = self.get(pos) {
            return Err(BoardError::CellOccupied { pos, occupant });
        }
        let mut next = *self;
        next.cells[pos.index()] = CellState::Played(player);
        Ok(next)
    }

    /// Empty positions, lazily, in canonical order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.get(*pos).is_empty())
    }

    /// Every cell with its state, in canonical order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Position::ALL.into_iter().map(move |pos| (pos, self.get(pos)))
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board, Board::default());
        assert_eq!(board.count(CellState::Empty), 9);
        assert_eq!(board.empty_positions().collect::<Vec<_>>(), Position::ALL);
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::empty();
        let next = board.place(Position::HCENTER_VCENTER, Player::X).unwrap();

        assert_eq!(board.get(Position::HCENTER_VCENTER), CellState::Empty);
        assert_eq!(
            next.get(Position::HCENTER_VCENTER),
            CellState::Played(Player::X)
        );
        assert_eq!(next.count(CellState::Empty), 8);
    }

    #[test]
    fn test_place_occupied_cell() {
        let board = Board::empty().place(Position::LEFT_TOP, Player::O).unwrap();
        let result = board.place(Position::LEFT_TOP, Player::X);

        assert_eq!(
            result,
            Err(BoardError::CellOccupied {
                pos: Position::LEFT_TOP,
                occupant: Player::O,
            })
        );
        assert!(result.unwrap_err().to_string().contains("already played"));
    }

    #[test]
    fn test_empty_positions_filters_played() {
        let board = Board::empty()
            .place(Position::LEFT_TOP, Player::X)
            .and_then(|b| b.place(Position::HCENTER_VCENTER, Player::O))
            .unwrap();

        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::LEFT_TOP));
        assert!(!empty.contains(&Position::HCENTER_VCENTER));
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cells_cover_every_position_once() {
        let board = Board::empty();
        let positions: Vec<_> = board.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions, Position::ALL);
    }
}
