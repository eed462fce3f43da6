//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the whole rule engine: the grid, the active piece, collision
//! detection, movement, rotation with a simple wall kick, line clearing and
//! scoring. It has **zero dependencies** on UI, networking, timing, or I/O:
//!
//! - **Deterministic**: Same seed (or scripted randomizer) produces identical games
//! - **Synchronous**: Every call runs to completion; the caller drives the clock
//! - **Owned**: One [`GameState`] value per session, no shared or global state
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks, painting and line clearing
//! - [`game_state`]: Active piece, lifecycle, movement, gravity and hard drop
//! - [`pieces`]: Packed shape table and its compile-time decoder
//! - [`rng`]: Injectable randomness for spawns
//! - [`scoring`]: Classic line clear points
//! - [`snapshot`]: Copyable view of a game for observers
//!
//! # Game Rules
//!
//! - Pieces spawn at the top row with a uniformly random kind, rotation and column
//! - Rotation advances one state; if blocked it retries one column left, then right
//! - `tick` drops one row, solidifying the piece when it cannot fall
//! - `drop_piece` hard drops and solidifies immediately
//! - Clearing 1/2/3/4+ rows at once scores 40/100/300/1200
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use tiny_tetris_core::{GameState, types::GamePhase};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), GamePhase::Ready);
//! game.start_new_game();
//!
//! // Drive it
//! game.move_left();
//! game.rotate();
//! game.tick();
//! game.drop_piece();
//!
//! // Query it
//! assert_eq!(game.cells().len(), 200);
//! assert!(game.cells().iter().all(|&c| c <= 7));
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tiny_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Tetromino};
pub use pieces::{decode_shape, get_shape, Shape};
pub use rng::{Randomizer, ScriptedRng, SimpleRng};
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
