//! Session module - drives one game from a stream of protocol lines.
//!
//! A session owns its [`GameState`] and answers every inbound line with exactly
//! one outbound line. It is synchronous and reads no clock; the peer sends
//! `tick` actions to advance gravity.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::rng::{time_seed, Randomizer, SimpleRng};
use crate::core::{GameSnapshot, GameState};
use crate::protocol::{create_error, parse_message, ClientMessage, ErrorCode, ServerMessage, StateMessage};
use crate::types::{GameAction, GamePhase};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Spawn seed; None seeds from the system clock
    pub seed: Option<u32>,
    /// Start a game before the first message arrives
    pub autostart: bool,
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: u32 seed (unset or unparsable: time-based)
    /// - `TETRIS_AUTOSTART`: "1" or "true" to start immediately
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("TETRIS_SEED").ok().and_then(|s| {
            let parsed = s.trim().parse().ok();
            if parsed.is_none() {
                warn!(value = %s, "ignoring unparsable TETRIS_SEED");
            }
            parsed
        });

        let autostart = env::var("TETRIS_AUTOSTART")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self { seed, autostart }
    }

    /// Seed this config resolves to
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(time_seed)
    }

    /// Build the game this config describes
    pub fn build_game(&self) -> GameState {
        let seed = self.resolve_seed();
        info!(seed, "seeding game");
        GameState::new(seed)
    }
}

/// One game driven by protocol messages
pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    snapshot: GameSnapshot,
    handled: u64,
}

impl<R: Randomizer> Session<R> {
    pub fn new(game: GameState<R>) -> Self {
        Self {
            game,
            snapshot: GameSnapshot::default(),
            handled: 0,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    /// Number of messages answered so far
    pub fn handled(&self) -> u64 {
        self.handled
    }

    /// Start a fresh game
    pub fn start(&mut self) {
        self.game.start_new_game();
    }

    /// Start a game if none has been started yet
    fn ensure_started(&mut self) {
        if self.game.phase() == GamePhase::Ready {
            self.game.start_new_game();
        }
    }

    fn state_message(&mut self) -> StateMessage {
        self.game.snapshot_into(&mut self.snapshot);
        StateMessage::from(&self.snapshot)
    }

    /// Answer one parsed message
    pub fn handle(&mut self, msg: ClientMessage) -> ServerMessage {
        self.handled += 1;

        match msg {
            ClientMessage::Start => {
                self.start();
                ServerMessage::State(self.state_message())
            }
            ClientMessage::State => {
                self.ensure_started();
                ServerMessage::State(self.state_message())
            }
            ClientMessage::Action { action } => {
                // Only `start` gets past a finished game, known action or not.
                let parsed = GameAction::from_str(&action);
                if parsed != Some(GameAction::Start) && self.game.is_game_over() {
                    return create_error(ErrorCode::GameOver, None);
                }
                let Some(parsed) = parsed else {
                    warn!(action = %action, "unknown action");
                    return create_error(ErrorCode::InvalidAction, Some(&action));
                };

                self.ensure_started();

                let success = self.game.apply_action(parsed);
                debug!(action = parsed.as_str(), success, score = self.game.score(), "applied action");

                let mut state = self.state_message();
                state.action = Some(parsed.as_str());
                state.success = Some(success);
                ServerMessage::State(state)
            }
        }
    }

    /// Answer one raw line; blank lines produce no reply
    pub fn handle_line(&mut self, line: &str) -> Option<ServerMessage> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match parse_message(line) {
            Ok(msg) => Some(self.handle(msg)),
            Err(e) => {
                self.handled += 1;
                warn!(error = %e, "rejected malformed message");
                Some(create_error(ErrorCode::InvalidJson, Some(&e.to_string())))
            }
        }
    }

    /// Serve line-delimited JSON until `input` reaches EOF
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read message line")?;
            let Some(reply) = self.handle_line(&line) else {
                continue;
            };

            serde_json::to_writer(&mut output, &reply).context("failed to encode reply")?;
            output.write_all(b"\n").context("failed to write reply")?;
            output.flush().context("failed to flush reply")?;
        }

        debug!(handled = self.handled, score = self.game.score(), "input closed");
        Ok(())
    }
}
