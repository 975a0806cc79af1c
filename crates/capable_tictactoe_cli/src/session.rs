//! Driver session: the single "current snapshot" of a game.

use capable_tictactoe::{MoveResult, Position, TicTacToeApi, inject_logging};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Bounded engine log, newest entry first.
#[derive(Debug, Clone)]
pub struct LogHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl LogHistory {
    /// Creates an empty history holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a line, dropping the oldest one when full.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(line.into());
    }

    /// Lines, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Holds the current snapshot and turns selections into capability calls.
///
/// Input handling is serialized through `&mut self`, so the snapshot on
/// screen and the one used to resolve the next selection are always the
/// same.
pub struct Session {
    api: TicTacToeApi,
    current: MoveResult,
    log: Arc<Mutex<LogHistory>>,
}

impl Session {
    /// Starts a session with a fresh game.
    ///
    /// Engine calls are reported through `tracing` and kept in a log of
    /// at most `log_history` lines.
    #[instrument]
    pub fn new(log_history: usize) -> Self {
        let log = Arc::new(Mutex::new(LogHistory::new(log_history)));
        let sink_log = Arc::clone(&log);
        let api = inject_logging(TicTacToeApi::default(), move |msg| {
            info!(target: "capable_tictactoe::engine", "{}", msg);
            lock_history(&sink_log).push(msg);
        });
        let current = api.new_game();
        Self { api, current, log }
    }

    /// The snapshot currently shown.
    pub fn current(&self) -> &MoveResult {
        &self.current
    }

    /// Replaces the current snapshot with a new game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.current = self.api.new_game();
    }

    /// Plays `pos` if the current snapshot offers a capability for it.
    ///
    /// Returns false, leaving the snapshot unchanged, when the cell is
    /// taken or the game is over.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> bool {
        match self.current.play(pos) {
            Some(next) => {
                self.current = next;
                true
            }
            None => {
                debug!("No capability for selection, ignoring");
                false
            }
        }
    }

    /// Engine log, newest first.
    pub fn log(&self) -> Vec<String> {
        lock_history(&self.log)
            .entries()
            .map(str::to_string)
            .collect()
    }
}

/// Locks the history, recovering it if a holder panicked.
///
/// Lines are pushed whole, so a poisoned history is still consistent.
fn lock_history(log: &Mutex<LogHistory>) -> MutexGuard<'_, LogHistory> {
    log.lock().unwrap_or_else(|poisoned| {
        warn!("Log history lock poisoned, recovering");
        poisoned.into_inner()
    })
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current", &self.current.to_string())
            .finish_non_exhaustive()
    }
}
