//! Pieces module - packed shape table and its decoder
//!
//! Every (piece kind, rotation) pair is stored as one packed integer holding
//! ten 2-bit fields, read low bits first:
//!
//! | Bits | Field |
//! |------|-------|
//! | 0-1 | y0 |
//! | 2-3 | x0 |
//! | 4-5 | y1 |
//! | 6-7 | x1 |
//! | 8-9 | y2 |
//! | 10-11 | x2 |
//! | 12-13 | y3 |
//! | 14-15 | x3 |
//! | 16-17 | width - 1 |
//! | 18-19 | height - 1 |
//!
//! The packed codes are the source of truth: they decide which pieces spawn
//! and how they look, so they must not be edited. [`SHAPES`] is decoded from
//! them at compile time.

use crate::types::{PieceKind, Point, Rotation};

/// Shape of a piece - 4 block offsets from the anchor plus bounding box size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub blocks: [Point; 4],
    pub width: u8,
    pub height: u8,
}

impl Shape {
    /// Absolute board cells covered when anchored at `anchor`
    pub fn cells_at(&self, anchor: Point) -> [Point; 4] {
        self.blocks.map(|b| anchor.offset(b.x, b.y))
    }
}

/// Packed shape codes, indexed `[kind][rotation]`
pub const SHAPE_CODES: [[u32; 4]; 7] = [
    [431424, 598356, 431424, 598356],
    [427089, 615696, 427089, 615696],
    [348480, 348480, 348480, 348480],
    [599636, 431376, 598336, 432192],
    [411985, 610832, 415808, 595540],
    [247872, 799248, 247872, 799248],
    [614928, 399424, 615744, 428369],
];

/// Decoded shape table, indexed `[kind][rotation]`
pub const SHAPES: [[Shape; 4]; 7] = decode_table(&SHAPE_CODES);

#[inline(always)]
const fn two_bits(code: u32, offset: u32) -> u8 {
    ((code >> offset) & 3) as u8
}

/// Decode one packed shape code
///
/// # Examples
///
/// ```
/// use tiny_tetris_core::pieces::decode_shape;
/// use tiny_tetris_core::types::Point;
///
/// // The square: (0,0) (1,0) (0,1) (1,1) in a 2x2 box
/// let square = decode_shape(348480);
/// assert_eq!(square.width, 2);
/// assert_eq!(square.height, 2);
/// assert_eq!(square.blocks[3], Point::new(1, 1));
/// ```
pub const fn decode_shape(code: u32) -> Shape {
    let mut blocks = [Point::new(0, 0); 4];
    let mut i = 0;
    while i < 4 {
        let y = two_bits(code, (i * 4) as u32);
        let x = two_bits(code, (i * 4 + 2) as u32);
        blocks[i] = Point::new(x as i8, y as i8);
        i += 1;
    }

    Shape {
        blocks,
        width: two_bits(code, 16) + 1,
        height: two_bits(code, 18) + 1,
    }
}

/// Decode a whole `[kind][rotation]` code table
pub const fn decode_table(codes: &[[u32; 4]; 7]) -> [[Shape; 4]; 7] {
    let empty = Shape {
        blocks: [Point::new(0, 0); 4],
        width: 1,
        height: 1,
    };
    let mut table = [[empty; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let mut rot = 0;
        while rot < 4 {
            table[kind][rot] = decode_shape(codes[kind][rot]);
            rot += 1;
        }
        kind += 1;
    }
    table
}

/// Get the shape for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPES[kind.index()][rotation.index()]
}

/// Widest bounding box across the whole table
pub fn max_shape_width() -> u8 {
    SHAPES
        .iter()
        .flat_map(|row| row.iter())
        .map(|s| s.width)
        .max()
        .unwrap_or(1)
}
