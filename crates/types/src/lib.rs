//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, stdio adapter, tests).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Cell Values
//!
//! The board stores one byte per cell:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | empty |
//! | 1-7 | solidified block of piece type `value - 1` |
//!
//! # Examples
//!
//! ```
//! use tiny_tetris_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Piece kinds map to table indices and cell values
//! assert_eq!(PieceKind::O.index(), 2);
//! assert_eq!(PieceKind::O.cell_value(), 3);
//!
//! // Rotation cycles through four states
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! // Actions parse from their wire names
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// A cell on the game board: 0 = empty, `t + 1` = solidified block of piece type `t`.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY_CELL: Cell = 0;

/// Largest value a board cell can hold (piece type 6 + 1)
pub const MAX_CELL: Cell = 7;

/// Line clear scoring table, indexed by rows cleared in one solidify.
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 or more lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Integer board coordinate or piece-relative offset.
///
/// `x` is the column (left to right), `y` is the row (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by an offset
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The seven piece types, in shape table order.
///
/// The discriminant is the shape table row; the cell value written to the
/// board is the discriminant plus one. Names follow the silhouette of each
/// type's first rotation in the packed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    S,
    O,
    J,
    T,
    I,
    L,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::J,
        PieceKind::T,
        PieceKind::I,
        PieceKind::L,
    ];

    /// Shape table row for this kind (0-6)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Value written into board cells occupied by this kind (1-7)
    pub const fn cell_value(self) -> Cell {
        self as Cell + 1
    }

    /// Look up a kind by table row
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(5), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up the kind that wrote a non-empty cell value
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            EMPTY_CELL => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::I => "i",
            PieceKind::L => "l",
        }
    }
}

/// The four rotation states, in shape table column order.
///
/// Rotating always advances one column: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in table order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Shape table column for this rotation (0-3)
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rotate clockwise (next table column)
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are the mutators a front end drives the engine with, named the way
/// the stdio protocol spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece to the next rotation state (with wall kick)
    Rotate,
    /// Hard drop and solidify
    Drop,
    /// Advance gravity by one row
    Tick,
    /// Start a new game
    Start,
}

impl GameAction {
    /// Parse action from its wire name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Left));
    /// assert_eq!(GameAction::from_str("DROP"), Some(GameAction::Drop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "rotate" => Some(GameAction::Rotate),
            "drop" => Some(GameAction::Drop),
            "tick" => Some(GameAction::Tick),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
            GameAction::Tick => "tick",
            GameAction::Start => "start",
        }
    }
}

/// Lifecycle phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Constructed, no game started yet
    Ready,
    /// A piece is falling
    Active,
    /// A spawned piece collided; only a new game leaves this phase
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Active => "active",
            GamePhase::GameOver => "gameover",
        }
    }
}

/// Core-side event recorded each time a piece solidifies.
///
/// This is engine-internal and can be mapped to the adapter's `lastEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreLastEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
}
