//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart
//! from board storage and from the engine so each can be tested on its
//! own.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tied};
pub use win::{WINNING_LINES, has_won, winner};
