//! The engine's public operations as a replaceable value.

use super::engine::{self, MoveResult};
use std::sync::Arc;

type NewGame = dyn Fn() -> MoveResult + Send + Sync;

/// Entry point handed to a presentation layer.
///
/// `new_game` is stored as a function value so a wrapper with the same
/// signature (see [`inject_logging`](crate::inject_logging)) can stand in
/// for it. Moves need no entry here: they are the capabilities carried by
/// each [`MoveResult`].
#[derive(Clone)]
pub struct TicTacToeApi {
    new_game: Arc<NewGame>,
}

impl TicTacToeApi {
    /// Builds an API around a custom `new_game` operation.
    pub fn new(new_game: impl Fn() -> MoveResult + Send + Sync + 'static) -> Self {
        Self {
            new_game: Arc::new(new_game),
        }
    }

    /// Starts a new game.
    pub fn new_game(&self) -> MoveResult {
        (self.new_game)()
    }
}

impl Default for TicTacToeApi {
    fn default() -> Self {
        Self::new(engine::new_game)
    }
}

impl std::fmt::Debug for TicTacToeApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicTacToeApi").finish_non_exhaustive()
    }
}
