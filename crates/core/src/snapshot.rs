use crate::game_state::Tetromino;
use crate::types::{CoreLastEvent, GamePhase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.pos.x,
            y: value.pos.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub phase: GamePhase,
    pub game_over: bool,
    pub score: u32,
    pub lines: u32,
    pub last_event: Option<CoreLastEvent>,
    /// Games started by this state, counting from 0
    pub episode_id: u32,
    /// Pieces spawned by this state across all games
    pub piece_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: GamePhase::Ready,
            game_over: false,
            score: 0,
            lines: 0,
            last_event: None,
            episode_id: 0,
            piece_id: 0,
        }
    }
}
