//! Shape table tests - decoding the packed codes

use tiny_tetris::core::pieces::{max_shape_width, SHAPES, SHAPE_CODES};
use tiny_tetris::core::{decode_shape, get_shape};
use tiny_tetris::types::{PieceKind, Point, Rotation};

fn blocks(kind: PieceKind, rotation: Rotation) -> Vec<(i8, i8)> {
    get_shape(kind, rotation)
        .blocks
        .iter()
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn test_square_is_identical_in_every_rotation() {
    for rotation in Rotation::ALL {
        let shape = get_shape(PieceKind::O, rotation);
        assert_eq!(shape.width, 2);
        assert_eq!(shape.height, 2);
        assert_eq!(blocks(PieceKind::O, rotation), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}

#[test]
fn test_bar_alternates_horizontal_and_vertical() {
    let flat = get_shape(PieceKind::I, Rotation::North);
    assert_eq!((flat.width, flat.height), (4, 1));
    assert_eq!(blocks(PieceKind::I, Rotation::North), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);

    let tall = get_shape(PieceKind::I, Rotation::East);
    assert_eq!((tall.width, tall.height), (1, 4));
    assert_eq!(blocks(PieceKind::I, Rotation::East), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);

    assert_eq!(get_shape(PieceKind::I, Rotation::South), flat);
    assert_eq!(get_shape(PieceKind::I, Rotation::West), tall);
}

#[test]
fn test_t_piece_rotations() {
    assert_eq!(blocks(PieceKind::T, Rotation::North), vec![(0, 1), (1, 1), (2, 1), (1, 0)]);
    assert_eq!(blocks(PieceKind::T, Rotation::East), vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    assert_eq!(blocks(PieceKind::T, Rotation::South), vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    assert_eq!(blocks(PieceKind::T, Rotation::West), vec![(1, 0), (1, 1), (1, 2), (0, 1)]);
}

#[test]
fn test_every_shape_is_consistent() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let shape = get_shape(kind, rotation);
            let mut seen = Vec::new();
            for b in shape.blocks {
                assert!(b.x >= 0 && (b.x as u8) < shape.width, "{kind:?} {rotation:?}");
                assert!(b.y >= 0 && (b.y as u8) < shape.height, "{kind:?} {rotation:?}");
                assert!(!seen.contains(&b), "duplicate block in {kind:?} {rotation:?}");
                seen.push(b);
            }
            // Box is tight: some block touches the far column and row.
            assert!(shape.blocks.iter().any(|b| b.x as u8 == shape.width - 1));
            assert!(shape.blocks.iter().any(|b| b.y as u8 == shape.height - 1));
        }
    }
}

#[test]
fn test_table_matches_runtime_decoding() {
    for (k, row) in SHAPE_CODES.iter().enumerate() {
        for (r, &code) in row.iter().enumerate() {
            assert_eq!(SHAPES[k][r], decode_shape(code));
        }
    }
}

#[test]
fn test_decode_reads_low_bits_first() {
    // y0=1 x0=2, other blocks at origin, width 3, height 2.
    let code = 1 | (2 << 2) | (2 << 16) | (1 << 18);
    let shape = decode_shape(code);
    assert_eq!(shape.blocks[0], Point::new(2, 1));
    assert_eq!(shape.blocks[1], Point::new(0, 0));
    assert_eq!((shape.width, shape.height), (3, 2));
}

#[test]
fn test_max_width_is_the_bar() {
    assert_eq!(max_shape_width(), 4);
}
