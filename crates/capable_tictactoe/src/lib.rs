//! Capability-based tic-tac-toe engine.
//!
//! Every game snapshot ([`MoveResult`]) carries the exact set of legal
//! next moves, each as a [`Capability`] that produces the following
//! snapshot. There is no "apply move at position" entry point: the only
//! way to advance a game is to invoke a capability the engine handed out.
//!
//! # Example
//!
//! ```
//! use capable_tictactoe::{MoveResult, Position, TicTacToeApi};
//!
//! let api = TicTacToeApi::default();
//! let start = api.new_game();
//! assert_eq!(start.moves().len(), 9);
//!
//! let next = start.play(Position::HCENTER_VCENTER).unwrap();
//! assert!(matches!(next, MoveResult::PlayerOToMove { .. }));
//!
//! // The taken cell has no capability any more.
//! assert!(next.play(Position::HCENTER_VCENTER).is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod board;
mod display;
mod engine;
mod logging;
mod position;
pub mod rules;
mod types;

pub use api::TicTacToeApi;
pub use board::{Board, BoardError};
pub use display::{CellDisplay, DisplayInfo};
pub use engine::{Capability, MoveResult, NextMoveInfo, new_game};
pub use logging::{LogSink, inject_logging};
pub use position::{HorizPosition, Position, PositionParseError, VertPosition};
pub use types::{CellState, Player};
