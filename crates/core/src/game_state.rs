//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, shape table, RNG, and
//! scoring. It owns the active piece and drives movement, rotation, gravity,
//! hard drops, line clears and the game lifecycle.
//!
//! The active piece is always drawn into the board. Every mutator that moves it
//! follows the same protocol: erase it, test the candidate placement, commit the
//! candidate if it is free, then redraw at the final placement. A rejected move
//! therefore leaves the board exactly as it was.

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{get_shape, Shape};
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Top-left corner of the bounding box
    pub pos: Point,
}

impl Tetromino {
    pub fn new(kind: PieceKind, rotation: Rotation, pos: Point) -> Self {
        Self {
            kind,
            rotation,
            pos,
        }
    }

    /// Get the shape for current rotation
    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells covered by this piece
    pub fn cells(&self) -> [Point; 4] {
        self.shape().cells_at(self.pos)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            pos: self.pos.offset(dx, dy),
            ..self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<Tetromino>,
    rng: R,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Monotonic episode id (increments on every new game).
    episode_id: u32,
    /// Last solidify event (consumed by observers).
    last_event: Option<CoreLastEvent>,
    score: u32,
    lines: u32,
    game_over: bool,
    started: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a new game seeded from the system clock
    pub fn from_time() -> Self {
        Self::with_rng(SimpleRng::from_time())
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Randomizer> GameState<R> {
    /// Create a new game drawing spawns from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng,
            piece_id: 0,
            episode_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            game_over: false,
            started: false,
        }
    }

    /// Reset board, score and flags, then spawn the first piece
    pub fn start_new_game(&mut self) {
        if self.started {
            self.episode_id = self.episode_id.wrapping_add(1);
        }
        self.board.clear();
        self.active = None;
        self.last_event = None;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.started = true;

        info!(episode = self.episode_id, "new game");
        self.spawn_piece();
    }

    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::Ready
        } else if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Active
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-major board cells, `BOARD_WIDTH * BOARD_HEIGHT` long, values 0-7
    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    /// Most recent solidify event, if any since the game started
    pub fn last_event(&self) -> Option<CoreLastEvent> {
        self.last_event
    }

    /// Take and clear the last solidify event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, drawing it at its new placement
    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Tetromino) {
        if let Some(old) = self.active.take() {
            self.place_or_remove(old.pos, old.kind, old.rotation, EMPTY_CELL);
        }
        self.started = true;
        self.game_over = false;
        self.draw(piece);
        self.active = Some(piece);
    }

    /// Check whether a piece placed at `pos` leaves the board or overlaps a filled cell.
    ///
    /// The active piece is part of the board, so probing its own cells reports a collision.
    pub fn check_collision(&self, pos: Point, kind: PieceKind, rotation: Rotation) -> bool {
        self.board.collides(get_shape(kind, rotation), pos)
    }

    /// Write `value` into the in-bounds cells of a piece placed at `pos`
    pub(crate) fn place_or_remove(
        &mut self,
        pos: Point,
        kind: PieceKind,
        rotation: Rotation,
        value: Cell,
    ) {
        self.board.paint(get_shape(kind, rotation), pos, value);
    }

    fn draw(&mut self, piece: Tetromino) {
        self.place_or_remove(piece.pos, piece.kind, piece.rotation, piece.kind.cell_value());
    }

    fn erase(&mut self, piece: Tetromino) {
        self.place_or_remove(piece.pos, piece.kind, piece.rotation, EMPTY_CELL);
    }

    fn fits(&self, piece: &Tetromino) -> bool {
        !self.check_collision(piece.pos, piece.kind, piece.rotation)
    }

    /// Active piece, if the game accepts input
    fn playable_piece(&self) -> Option<Tetromino> {
        if self.game_over {
            return None;
        }
        self.active
    }

    /// Uniform index in `[0, n)`
    fn draw_index(&mut self, n: usize) -> usize {
        let v = self.rng.next_range(n as u32) as usize;
        debug_assert!(v < n, "randomizer returned {v}, expected below {n}");
        v % n
    }

    /// Spawn a new random piece at the top of the board
    ///
    /// Returns false (and ends the game) if the spawn placement is blocked.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let kind = PieceKind::ALL[self.draw_index(PieceKind::ALL.len())];
        let rotation = Rotation::ALL[self.draw_index(Rotation::ALL.len())];
        let shape = get_shape(kind, rotation);
        let columns = (BOARD_WIDTH - shape.width + 1) as usize;
        let x = self.draw_index(columns) as i8;

        let piece = Tetromino::new(kind, rotation, Point::new(x, 0));
        if !self.fits(&piece) {
            self.active = None;
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "game over");
            return false;
        }

        self.draw(piece);
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            kind = kind.as_str(),
            rotation = rotation.as_str(),
            x,
            piece_id = self.piece_id,
            "spawned piece"
        );
        true
    }

    /// Shift the active piece horizontally by `dx`
    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        self.erase(active);
        let candidate = active.shifted(dx, 0);
        let moved = self.fits(&candidate);
        let settled = if moved { candidate } else { active };
        self.draw(settled);
        self.active = Some(settled);
        moved
    }

    /// Move the active piece one column left
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Move the active piece one column right
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate the active piece to its next rotation state.
    ///
    /// Tries the current column first, then one column left, then one column
    /// right. If all three collide the piece keeps its rotation and position.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        self.erase(active);
        let rotated = Tetromino {
            rotation: active.rotation.rotate_cw(),
            ..active
        };
        let landed = [0, -1, 1]
            .into_iter()
            .map(|dx| rotated.shifted(dx, 0))
            .find(|candidate| self.fits(candidate));

        let settled = landed.unwrap_or(active);
        self.draw(settled);
        self.active = Some(settled);
        landed.is_some()
    }

    /// Advance gravity by one row.
    ///
    /// If the piece cannot fall it solidifies where it rests and the next piece
    /// spawns. Returns whether the game is still active afterwards.
    pub fn tick(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        self.erase(active);
        let below = active.shifted(0, 1);
        if self.fits(&below) {
            self.draw(below);
            self.active = Some(below);
        } else {
            self.draw(active);
            self.solidify();
        }

        !self.game_over
    }

    /// Hard drop the active piece to the lowest free row and solidify it
    pub fn drop_piece(&mut self) {
        let Some(active) = self.playable_piece() else {
            return;
        };

        self.erase(active);
        let mut landed = active;
        loop {
            let next = landed.shifted(0, 1);
            if !self.fits(&next) {
                break;
            }
            landed = next;
        }

        self.draw(landed);
        self.active = Some(landed);
        self.solidify();
    }

    /// Fix the active piece into the board, clear rows, score, and spawn the next piece
    fn solidify(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        debug!(
            kind = piece.kind.as_str(),
            x = piece.pos.x,
            y = piece.pos.y,
            "piece solidified"
        );

        let before = self.score;
        let lines_cleared = self.clear_full_lines();
        self.last_event = Some(CoreLastEvent {
            lines_cleared: lines_cleared as u32,
            line_clear_score: self.score - before,
        });

        self.spawn_piece();
    }

    /// Remove every full row and award points for them
    ///
    /// Returns the number of rows cleared.
    pub(crate) fn clear_full_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len();
        if lines_cleared == 0 {
            return 0;
        }

        let points = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        debug!(rows = ?cleared.as_slice(), points, score = self.score, "cleared rows");
        lines_cleared
    }

    /// Apply a game action
    ///
    /// Returns the mutator's own result; `Drop` and `Start` report whether they ran.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Left => self.move_left(),
            GameAction::Right => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::Drop => {
                let playable = self.playable_piece().is_some();
                self.drop_piece();
                playable
            }
            GameAction::Tick => self.tick(),
            GameAction::Start => {
                self.start_new_game();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase();
        out.game_over = self.game_over;
        out.score = self.score;
        out.lines = self.lines;
        out.last_event = self.last_event;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
