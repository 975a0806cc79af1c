//! Logging decorator for the engine API.
//!
//! Wraps `new_game` and, recursively, every capability of every result
//! it produces, forwarding a human-readable line per engine call to an
//! injected sink. The engine itself never logs.

use super::api::TicTacToeApi;
use super::engine::{Capability, MoveResult, NextMoveInfo};
use std::sync::Arc;

/// Receives one message per engine call.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns an API whose calls are reported to `sink`.
///
/// Messages, in order:
/// - `new_game`: `"New game"`, then the resulting status line.
/// - each capability: `"Player X played LeftTop"`, then the resulting
///   status line.
pub fn inject_logging(
    api: TicTacToeApi,
    sink: impl Fn(&str) + Send + Sync + 'static,
) -> TicTacToeApi {
    let sink: LogSink = Arc::new(sink);
    TicTacToeApi::new(move || {
        sink("New game");
        let result = api.new_game();
        sink(&result.status_line());
        decorate(result, &sink)
    })
}

fn decorate(result: MoveResult, sink: &LogSink) -> MoveResult {
    let Some(player) = result.to_move() else {
        return result;
    };

    result.map_moves(|mv| {
        let NextMoveInfo {
            pos_to_play,
            capability,
        } = mv;
        let sink = Arc::clone(sink);
        NextMoveInfo {
            pos_to_play,
            capability: Capability::new(move || {
                sink(&format!("Player {} played {}", player, pos_to_play));
                let next = capability.invoke();
                sink(&next.status_line());
                decorate(next, &sink)
            }),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};
    use std::sync::Mutex;

    fn recording_api() -> (TicTacToeApi, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let api = inject_logging(TicTacToeApi::default(), move |msg| {
            sink_lines.lock().unwrap().push(msg.to_string());
        });
        (api, lines)
    }

    #[test]
    fn test_new_game_is_logged() {
        let (api, lines) = recording_api();
        let result = api.new_game();

        assert_eq!(result.moves().len(), 9);
        assert_eq!(
            *lines.lock().unwrap(),
            vec!["New game".to_string(), "Player X to move".to_string()]
        );
    }

    #[test]
    fn test_nested_capabilities_are_logged() {
        let (api, lines) = recording_api();
        let result = api
            .new_game()
            .play(Position::HCENTER_VCENTER)
            .and_then(|r| r.play(Position::LEFT_TOP))
            .unwrap();

        assert_eq!(result.to_move(), Some(Player::X));
        assert_eq!(
            lines.lock().unwrap()[2..],
            [
                "Player X played HCenterVCenter".to_string(),
                "Player O to move".to_string(),
                "Player O played LeftTop".to_string(),
                "Player X to move".to_string(),
            ]
        );
    }

    #[test]
    fn test_decorated_results_match_plain_results() {
        let (api, _lines) = recording_api();
        let plain = TicTacToeApi::default();

        let decorated = api.new_game().play(Position::RIGHT_TOP).unwrap();
        let undecorated = plain.new_game().play(Position::RIGHT_TOP).unwrap();
        assert_eq!(decorated, undecorated);
    }

    #[test]
    fn test_messages_use_status_lines_of_results() {
        let (api, lines) = recording_api();
        let first = api.new_game();
        let second = first.play(Position::LEFT_TOP).unwrap();

        let lines = lines.lock().unwrap();
        assert_eq!(lines[1], first.status_line());
        assert_eq!(lines[3], second.status_line());
    }
}
