//! Tiny Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name: `tiny_tetris::{core,adapter,types}`.
//! The rule engine lives in `crates/core`, shared plain types in `crates/types`,
//! and the stdio JSON front end in `crates/adapter`.

pub use tiny_tetris_adapter as adapter;
pub use tiny_tetris_core as core;
pub use tiny_tetris_types as types;
