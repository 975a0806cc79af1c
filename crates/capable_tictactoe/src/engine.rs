//! Capability-based game engine.
//!
//! Every [`MoveResult`] embeds the moves that are legal from it. Each
//! move is a [`Capability`] that closes over the pre-move board and the
//! player to move, so turn order lives in closure construction instead
//! of a mutable "whose turn" flag. Invoking a capability never mutates
//! the result it came from.

use super::board::Board;
use super::display::DisplayInfo;
use super::position::Position;
use super::rules::{has_won, is_tied};
use super::types::Player;
use std::sync::Arc;

type Transition = dyn Fn() -> MoveResult + Send + Sync;

/// The sole operation able to realize one legal move.
///
/// Only the engine (and decorators inside this crate) can create one, so
/// holding a `Capability` proves the move was generated as legal.
#[derive(Clone)]
pub struct Capability(Arc<Transition>);

impl Capability {
    pub(crate) fn new(transition: impl Fn() -> MoveResult + Send + Sync + 'static) -> Self {
        Self(Arc::new(transition))
    }

    /// Commits the move and returns the resulting snapshot.
    ///
    /// Invoking the same capability twice yields equal results.
    pub fn invoke(&self) -> MoveResult {
        (self.0)()
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Capability(..)")
    }
}

/// One legal move: where it lands and how to play it.
#[derive(Debug, Clone)]
pub struct NextMoveInfo {
    /// The cell this move would occupy.
    pub pos_to_play: Position,
    /// Plays the move.
    pub capability: Capability,
}

impl PartialEq for NextMoveInfo {
    /// Compares target positions.
    ///
    /// Two moves with the same target, attached to equal snapshots,
    /// capture the same board and player and so behave identically.
    fn eq(&self, other: &Self) -> bool {
        self.pos_to_play == other.pos_to_play
    }
}

impl Eq for NextMoveInfo {}

/// One immutable snapshot of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// X is to move.
    PlayerXToMove {
        /// Board snapshot.
        display: DisplayInfo,
        /// One move per empty cell, canonical order.
        moves: Vec<NextMoveInfo>,
    },
    /// O is to move.
    PlayerOToMove {
        /// Board snapshot.
        display: DisplayInfo,
        /// One move per empty cell, canonical order.
        moves: Vec<NextMoveInfo>,
    },
    /// Terminal: someone completed a line.
    GameWon {
        /// Final board.
        display: DisplayInfo,
        /// Who completed the line.
        winner: Player,
    },
    /// Terminal: full board, no line.
    GameTied {
        /// Final board.
        display: DisplayInfo,
    },
}

impl MoveResult {
    /// Board snapshot for rendering.
    pub fn display(&self) -> &DisplayInfo {
        match self {
            MoveResult::PlayerXToMove { display, .. }
            | MoveResult::PlayerOToMove { display, .. }
            | MoveResult::GameWon { display, .. }
            | MoveResult::GameTied { display } => display,
        }
    }

    /// Legal moves; empty for terminal results.
    pub fn moves(&self) -> &[NextMoveInfo] {
        match self {
            MoveResult::PlayerXToMove { moves, .. } | MoveResult::PlayerOToMove { moves, .. } => {
                moves
            }
            MoveResult::GameWon { .. } | MoveResult::GameTied { .. } => &[],
        }
    }

    /// Player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            MoveResult::PlayerXToMove { .. } => Some(Player::X),
            MoveResult::PlayerOToMove { .. } => Some(Player::O),
            MoveResult::GameWon { .. } | MoveResult::GameTied { .. } => None,
        }
    }

    /// Winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveResult::GameWon { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns true for won and tied games.
    pub fn is_terminal(&self) -> bool {
        self.to_move().is_none()
    }

    /// Finds the legal move targeting `pos`.
    pub fn find_move(&self, pos: Position) -> Option<&NextMoveInfo> {
        self.moves().iter().find(|mv| mv.pos_to_play == pos)
    }

    /// Invokes the capability targeting `pos`.
    ///
    /// Returns `None` when no such capability exists (occupied cell or
    /// finished game); the caller keeps its current snapshot.
    pub fn play(&self, pos: Position) -> Option<MoveResult> {
        self.find_move(pos).map(|mv| mv.capability.invoke())
    }

    /// Status line shown to players.
    pub fn status_line(&self) -> String {
        match self {
            MoveResult::PlayerXToMove { .. } => "Player X to move".to_string(),
            MoveResult::PlayerOToMove { .. } => "Player O to move".to_string(),
            MoveResult::GameWon { winner, .. } => format!("GAME WON by Player {}", winner),
            MoveResult::GameTied { .. } => "GAME OVER - Tie".to_string(),
        }
    }

    /// Rebuilds the result with every move passed through `f`.
    pub(crate) fn map_moves(self, f: impl FnMut(NextMoveInfo) -> NextMoveInfo) -> MoveResult {
        match self {
            MoveResult::PlayerXToMove { display, moves } => MoveResult::PlayerXToMove {
                display,
                moves: moves.into_iter().map(f).collect(),
            },
            MoveResult::PlayerOToMove { display, moves } => MoveResult::PlayerOToMove {
                display,
                moves: moves.into_iter().map(f).collect(),
            },
            terminal => terminal,
        }
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status_line())
    }
}

/// Starts a game: X to move on an empty board, nine capabilities.
pub fn new_game() -> MoveResult {
    awaiting_move(Board::empty(), Player::X)
}

/// Snapshot for `player` to move on `board`.
fn awaiting_move(board: Board, player: Player) -> MoveResult {
    let display = DisplayInfo::from(&board);
    let moves = board
        .empty_positions()
        .map(|pos| NextMoveInfo {
            pos_to_play: pos,
            capability: Capability::new(move || step(board, player, pos)),
        })
        .collect();

    match player {
        Player::X => MoveResult::PlayerXToMove { display, moves },
        Player::O => MoveResult::PlayerOToMove { display, moves },
    }
}

/// Plays `pos` for `player`; the logic behind every capability.
fn step(board: Board, player: Player, pos: Position) -> MoveResult {
    let board = match board.place(pos, player) {
        Ok(board) => board,
        // Capabilities are only generated for empty cells.
        Err(e) => panic!("capability offered for a played cell: {e}"),
    };

    if has_won(&board, player) {
        return MoveResult::GameWon {
            display: DisplayInfo::from(&board),
            winner: player,
        };
    }

    if is_tied(&board) {
        return MoveResult::GameTied {
            display: DisplayInfo::from(&board),
        };
    }

    awaiting_move(board, player.opponent())
}
