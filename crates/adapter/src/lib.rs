//! Adapter module - drive the rule engine over stdio with a JSON protocol
//!
//! This crate lets an external program (a bot, a web backend, a test harness)
//! play a game by exchanging line-delimited JSON on a pair of byte streams.
//! The binary wires it to stdin/stdout; tests wire it to in-memory buffers.
//!
//! # Protocol Overview
//!
//! 1. **Requests**: One JSON object per line, tagged by `type`
//! 2. **Replies**: Exactly one JSON line per non-blank request
//! 3. **Lifecycle**: A game starts lazily on the first `state` or `action`
//! 4. **Shutdown**: The session ends at end of input
//!
//! # Message Types
//!
//! ## Client → Engine
//!
//! - **start**: Start (or restart) a game
//! - **state**: Report the current state
//! - **action**: Apply `left`, `right`, `rotate`, `drop`, `tick` (or `start`)
//!
//! ## Engine → Client
//!
//! - **state**: Board grid, score, lines, phase, active piece; for actions also
//!   the action name and whether it succeeded
//! - **error**: `invalid_json`, `invalid_action` or `game_over`. Once the game
//!   is over every action except `start` gets `game_over`, even an unknown one.
//!
//! # Environment Variables
//!
//! - `TETRIS_SEED`: Fixed spawn seed (default: time-based)
//! - `TETRIS_AUTOSTART`: Set to "1" or "true" to start before the first request
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Engine: {"type":"start"}
//! Engine -> Client: {"type":"state","board":[[0,0,...],...],"score":0,"lines":0,"gameOver":false,"phase":"active","active":{"kind":"t","rotation":"north","x":3,"y":0},"episodeId":0,"pieceId":1}
//! Client -> Engine: {"type":"action","action":"drop"}
//! Engine -> Client: {"type":"state","action":"drop","success":true,...,"lastEvent":{"linesCleared":0,"lineClearScore":0}}
//! Client -> Engine: {"type":"action","action":"hold"}
//! Engine -> Client: {"type":"error","code":"invalid_action","message":"unknown action: hold"}
//! ```

pub mod protocol;
pub mod session;

pub use tiny_tetris_core as core;
pub use tiny_tetris_types as types;

pub use protocol::*;
pub use session::{Session, SessionConfig};
