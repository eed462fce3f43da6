//! Protocol module - JSON message types for the stdio adapter
//!
//! Line-delimited JSON: one client message per line in, one server message
//! per line out. Every message carries a `type` tag.

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{CoreLastEvent, BOARD_HEIGHT, BOARD_WIDTH};

// ============== Client -> Engine Messages ==============

/// Inbound message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Start (or restart) a game
    #[serde(rename = "start")]
    Start,
    /// Report state without mutating it
    #[serde(rename = "state")]
    State,
    /// Apply one action by wire name (`left`, `right`, `rotate`, `drop`, `tick`)
    #[serde(rename = "action")]
    Action { action: String },
}

/// Parse one inbound line
pub fn parse_message(json: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(json)
}

// ============== Engine -> Client Messages ==============

/// Outbound message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "state")]
    State(StateMessage),
    #[serde(rename = "error")]
    Error(ErrorMessage),
}

/// Game state, optionally annotated with the action that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    /// For moves and rotations, whether the piece actually moved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize], // 0 = empty, 1-7 = piece type + 1
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActivePieceSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event: Option<LastEvent>,
    pub episode_id: u32,
    pub piece_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePieceSnapshot {
    pub kind: &'static str,
    pub rotation: &'static str,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
}

impl From<CoreLastEvent> for LastEvent {
    fn from(value: CoreLastEvent) -> Self {
        Self {
            lines_cleared: value.lines_cleared,
            line_clear_score: value.line_clear_score,
        }
    }
}

impl From<&GameSnapshot> for StateMessage {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            action: None,
            success: None,
            board: snap.board,
            score: snap.score,
            lines: snap.lines,
            game_over: snap.game_over,
            phase: snap.phase.as_str(),
            active: snap.active.map(|a| ActivePieceSnapshot {
                kind: a.kind.as_str(),
                rotation: a.rotation.as_str(),
                x: a.x,
                y: a.y,
            }),
            last_event: snap.last_event.map(LastEvent::from),
            episode_id: snap.episode_id,
            piece_id: snap.piece_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid_json")]
    InvalidJson,
    #[serde(rename = "invalid_action")]
    InvalidAction,
    #[serde(rename = "game_over")]
    GameOver,
}

impl ErrorCode {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidAction => "invalid_action",
            ErrorCode::GameOver => "game_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "message is not a valid client message",
            ErrorCode::InvalidAction => "unknown action",
            ErrorCode::GameOver => "game is over; start a new game",
        }
    }
}

/// Error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub message: String,
}

/// Create an error message, using the code's default text when `detail` is None
pub fn create_error(code: ErrorCode, detail: Option<&str>) -> ServerMessage {
    let message = match detail {
        Some(d) => format!("{}: {}", code.message(), d),
        None => code.message().to_string(),
    };
    ServerMessage::Error(ErrorMessage { code, message })
}
