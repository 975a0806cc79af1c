//! Read-only board snapshot for rendering.

use super::board::Board;
use super::position::Position;
use super::types::CellState;
use serde::{Deserialize, Serialize};

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellDisplay {
    /// Where the cell is.
    pub pos: Position,
    /// What is on it.
    pub state: CellState,
}

/// Board projection handed to the presentation layer.
///
/// Carries no capabilities and no behavior, so it can cross a rendering
/// boundary freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayInfo {
    cells: Vec<CellDisplay>,
}

impl DisplayInfo {
    /// Cells in canonical order.
    pub fn cells(&self) -> &[CellDisplay] {
        &self.cells
    }

    /// State of the cell at `pos`.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells
            .iter()
            .find(|cell| cell.pos == pos)
            .map(|cell| cell.state)
            .unwrap_or_default()
    }
}

impl From<&Board> for DisplayInfo {
    fn from(board: &Board) -> Self {
        Self {
            cells: board
                .cells()
                .map(|(pos, state)| CellDisplay { pos, state })
                .collect(),
        }
    }
}
