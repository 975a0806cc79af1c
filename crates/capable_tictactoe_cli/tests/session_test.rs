//! Driver session behavior against the engine.

use capable_tictactoe::{MoveResult, Player, Position};
use capable_tictactoe_cli::{DriverConfig, OutputFormat, Session, run_replay};

#[test]
fn test_session_starts_with_new_game() {
    let session = Session::new(10);
    assert!(matches!(session.current(), MoveResult::PlayerXToMove { .. }));
    assert_eq!(session.current().moves().len(), 9);
}

#[test]
fn test_turns_alternate_through_session() {
    let mut session = Session::new(10);
    let cells = [
        Position::HCENTER_VCENTER,
        Position::LEFT_TOP,
        Position::RIGHT_TOP,
        Position::LEFT_BOTTOM,
    ];
    let mut expected = Player::X;
    for pos in cells {
        assert_eq!(session.current().to_move(), Some(expected));
        assert!(session.select(pos));
        expected = expected.opponent();
    }
    assert_eq!(session.current().to_move(), Some(Player::X));
    assert_eq!(session.current().moves().len(), 5);
}

#[test]
fn test_clicks_after_win_are_ignored_until_new_game() {
    let mut session = Session::new(10);
    for pos in [
        Position::LEFT_TOP,
        Position::HCENTER_TOP,
        Position::LEFT_VCENTER,
        Position::HCENTER_VCENTER,
        Position::LEFT_BOTTOM,
    ] {
        assert!(session.select(pos));
    }
    assert_eq!(session.current().winner(), Some(Player::X));

    assert!(!session.select(Position::RIGHT_BOTTOM));
    assert_eq!(session.current().winner(), Some(Player::X));

    session.new_game();
    assert_eq!(session.current().moves().len(), 9);
    assert!(session.select(Position::RIGHT_BOTTOM));
}

#[test]
fn test_log_records_engine_calls_newest_first() {
    let mut session = Session::new(10);
    session.select(Position::HCENTER_VCENTER);
    // Ignored selections never reach the engine.
    session.select(Position::HCENTER_VCENTER);

    assert_eq!(
        session.log(),
        vec![
            "Player O to move".to_string(),
            "Player X played HCenterVCenter".to_string(),
            "Player X to move".to_string(),
            "New game".to_string(),
        ]
    );
}

#[test]
fn test_log_is_bounded() {
    let mut session = Session::new(3);
    session.select(Position::LEFT_TOP);
    session.select(Position::RIGHT_TOP);

    let log = session.log();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0], "Player X to move");
    assert_eq!(log[1], "Player O played RightTop");
}

#[test]
fn test_replay_prints_final_status() {
    let mut out = Vec::new();
    let moves: Vec<String> = ["1", "2", "4", "5", "7"].iter().map(|s| s.to_string()).collect();
    run_replay(&DriverConfig::default(), OutputFormat::Text, &moves, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("X|O|3"));
    assert!(text.contains("GAME WON by Player X"));
}

#[test]
fn test_replay_skips_taken_cells() {
    let mut out = Vec::new();
    let moves: Vec<String> = ["LeftTop", "LeftTop", "RightBottom"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    run_replay(&DriverConfig::default(), OutputFormat::Json, &moves, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["status"], "Player X to move");
    assert_eq!(value["legal_moves"].as_array().map(Vec::len), Some(7));
}
