//! Adapter session tests - full request/reply exchanges over in-memory streams

use serde_json::Value;
use tiny_tetris::adapter::{Session, SessionConfig};
use tiny_tetris::core::{GameState, ScriptedRng};

fn exchange(session: &mut Session<ScriptedRng>, requests: &[&str]) -> Vec<Value> {
    let input = requests.join("\n");
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_start_then_drop_reports_last_event() {
    // Flat bar at column 0 every time.
    let mut session = Session::new(GameState::with_rng(ScriptedRng::new([5, 0, 0])));
    let replies = exchange(
        &mut session,
        &[
            r#"{"type":"start"}"#,
            r#"{"type":"action","action":"drop"}"#,
            r#"{"type":"state"}"#,
        ],
    );

    assert_eq!(replies.len(), 3);

    let start = &replies[0];
    assert_eq!(start["type"], "state");
    assert_eq!(start["phase"], "active");
    assert_eq!(start["active"]["kind"], "i");
    assert_eq!(start["active"]["rotation"], "north");
    assert_eq!(start["board"][0][0], 6);

    let drop = &replies[1];
    assert_eq!(drop["action"], "drop");
    assert_eq!(drop["success"], true);
    assert_eq!(drop["board"][19][0], 6);
    assert_eq!(drop["board"][19][3], 6);
    assert_eq!(drop["lastEvent"]["linesCleared"], 0);
    assert_eq!(drop["lastEvent"]["lineClearScore"], 0);

    let state = &replies[2];
    assert!(state.get("action").is_none());
    assert_eq!(state["score"], 0);
    assert_eq!(state["lines"], 0);
    assert_eq!(state["gameOver"], false);
}

#[test]
fn test_rotate_and_tick_replies() {
    // T North at column 3.
    let mut session = Session::new(GameState::with_rng(ScriptedRng::new([4, 0, 3])));
    let replies = exchange(
        &mut session,
        &[
            r#"{"type":"action","action":"rotate"}"#,
            r#"{"type":"action","action":"tick"}"#,
        ],
    );

    assert_eq!(replies[0]["success"], true);
    assert_eq!(replies[0]["active"]["rotation"], "east");
    assert_eq!(replies[1]["success"], true);
    assert_eq!(replies[1]["active"]["y"], 1);
}

#[test]
fn test_errors_do_not_end_session() {
    let mut session = Session::new(GameState::with_rng(ScriptedRng::new([2, 0, 4])));
    let replies = exchange(
        &mut session,
        &[
            "garbage",
            r#"{"type":"action","action":"hold"}"#,
            "",
            r#"{"type":"state"}"#,
        ],
    );

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["code"], "invalid_json");
    assert_eq!(replies[1]["code"], "invalid_action");
    assert!(replies[1]["message"].as_str().unwrap().contains("hold"));
    assert_eq!(replies[2]["type"], "state");
    assert_eq!(session.handled(), 3);
}

#[test]
fn test_game_over_flow() {
    // Vertical bars in column 0 top out after five drops.
    let mut session = Session::new(GameState::with_rng(ScriptedRng::new([5, 1, 0])));
    let drop = r#"{"type":"action","action":"drop"}"#;
    let replies = exchange(
        &mut session,
        &[
            r#"{"type":"start"}"#,
            drop,
            drop,
            drop,
            drop,
            drop,
            r#"{"type":"action","action":"left"}"#,
            r#"{"type":"action","action":"hold"}"#,
            r#"{"type":"state"}"#,
            r#"{"type":"start"}"#,
        ],
    );

    assert_eq!(replies[5]["gameOver"], true);
    assert_eq!(replies[5]["phase"], "gameover");
    assert!(replies[5].get("active").is_none());

    assert_eq!(replies[5]["pieceId"], 5);
    assert_eq!(replies[5]["episodeId"], 0);

    assert_eq!(replies[6]["type"], "error");
    assert_eq!(replies[6]["code"], "game_over");
    // A finished game reports game over before judging the action name.
    assert_eq!(replies[7]["code"], "game_over");

    assert_eq!(replies[8]["type"], "state");
    assert_eq!(replies[8]["gameOver"], true);

    assert_eq!(replies[9]["gameOver"], false);
    assert_eq!(replies[9]["phase"], "active");
    assert_eq!(replies[9]["episodeId"], 1);
    assert_eq!(replies[9]["pieceId"], 6);
}

#[test]
fn test_default_config_is_lazy_and_unseeded() {
    let config = SessionConfig::default();
    assert!(!config.autostart);
    assert!(config.seed.is_none());
}
