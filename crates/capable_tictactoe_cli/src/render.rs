//! Text rendering of engine snapshots.

use crate::config::Markers;
use capable_tictactoe::{CellState, DisplayInfo, MoveResult, Player};
use serde::Serialize;

/// Marker for one cell state.
pub fn marker(state: CellState, markers: &Markers) -> &str {
    match state {
        CellState::Empty => markers.empty().as_str(),
        CellState::Played(Player::X) => markers.x().as_str(),
        CellState::Played(Player::O) => markers.o().as_str(),
    }
}

/// Status text for a snapshot.
pub fn status_text(result: &MoveResult) -> String {
    result.status_line()
}

/// Formats the board as a 3x3 grid.
///
/// Empty cells with a blank marker show their cell number (1-9) so the
/// player can type it.
pub fn render_grid(display: &DisplayInfo, markers: &Markers) -> String {
    let mut result = String::new();
    for (i, cell) in display.cells().iter().enumerate() {
        let symbol = match marker(cell.state, markers) {
            "" => (i + 1).to_string(),
            m => m.to_string(),
        };
        result.push_str(&symbol);
        match i % 3 {
            2 if i < 8 => result.push_str("\n-+-+-\n"),
            2 => {}
            _ => result.push('|'),
        }
    }
    result
}

/// Machine-readable view of a snapshot.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    /// Status text.
    pub status: String,
    /// Board cells.
    pub display: &'a DisplayInfo,
    /// Names of the cells that can be played.
    pub legal_moves: Vec<String>,
}

impl<'a> From<&'a MoveResult> for Frame<'a> {
    fn from(result: &'a MoveResult) -> Self {
        Self {
            status: status_text(result),
            display: result.display(),
            legal_moves: result
                .moves()
                .iter()
                .map(|mv| mv.pos_to_play.to_string())
                .collect(),
        }
    }
}

/// Full text view: grid followed by status.
pub fn render(result: &MoveResult, markers: &Markers) -> String {
    format!(
        "{}\n{}",
        render_grid(result.display(), markers),
        status_text(result)
    )
}

/// JSON view of a snapshot.
pub fn render_json(result: &MoveResult) -> serde_json::Result<String> {
    serde_json::to_string(&Frame::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DriverConfig;
    use capable_tictactoe::{Position, new_game};

    #[test]
    fn test_markers() {
        let markers = Markers::default();
        assert_eq!(marker(CellState::Empty, &markers), "");
        assert_eq!(marker(CellState::Played(Player::X), &markers), "X");
        assert_eq!(marker(CellState::Played(Player::O), &markers), "O");
    }

    #[test]
    fn test_grid_of_new_game_shows_numbers() {
        let grid = render_grid(new_game().display(), &Markers::default());
        assert_eq!(grid, "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_grid_shows_played_cells() {
        let result = new_game()
            .play(Position::HCENTER_VCENTER)
            .and_then(|r| r.play(Position::RIGHT_BOTTOM))
            .unwrap();
        let grid = render_grid(result.display(), &Markers::default());
        assert_eq!(grid, "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_custom_markers() {
        let config = DriverConfig::from_toml("[markers]\no = \"0\"\nempty = \".\"\n").unwrap();
        let result = new_game().play(Position::LEFT_TOP).unwrap();
        let result = result.play(Position::HCENTER_TOP).unwrap();
        let grid = render_grid(result.display(), config.markers());
        assert_eq!(grid, "X|0|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.");
    }

    #[test]
    fn test_render_appends_status() {
        let text = render(&new_game(), &Markers::default());
        assert!(text.ends_with("\nPlayer X to move"));
    }

    #[test]
    fn test_json_frame() {
        let json = render_json(&new_game()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Player X to move");
        assert_eq!(value["legal_moves"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["legal_moves"][0], "LeftTop");
    }
}
