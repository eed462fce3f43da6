//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cell values (0 = empty, 1-7 = piece type + 1).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, Point, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, EMPTY_CELL, MAX_CELL};

/// Row indices cleared by one scan, at most one per row
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        debug_assert!(cell <= MAX_CELL, "cell value {cell} out of range");
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY_CELL)
    }

    /// Check if a shape anchored at `anchor` leaves the board or overlaps a filled cell
    pub fn collides(&self, shape: &Shape, anchor: Point) -> bool {
        shape
            .cells_at(anchor)
            .iter()
            .any(|p| !matches!(self.get(p.x, p.y), Some(EMPTY_CELL)))
    }

    /// Write `value` into every in-bounds cell of a shape anchored at `anchor`.
    ///
    /// Cells outside the board are skipped. `0` erases, `kind + 1` draws.
    pub fn paint(&mut self, shape: &Shape, anchor: Point, value: Cell) {
        for p in shape.cells_at(anchor) {
            self.set(p.x, p.y, value);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Clear a row and shift all rows above down
    /// Returns the number of lines cleared (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(EMPTY_CELL);

        1
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top)
    ///
    /// Rows are scanned from the bottom up. A full row is removed in place and
    /// the same index is examined again, since the row above has just moved into it.
    /// Returned indices refer to the board as it was before the scan.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // Every earlier clear happened at or below `row`, so the
                // content here originally sat `cleared.len()` rows higher.
                cleared.push(row - cleared.len());
                self.clear_row(row);
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get one row as a slice
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Write the board into a fixed-size 2D grid (row-major)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Create from a 2D vector (converts to flat array)
    ///
    /// Returns None if the dimensions do not match the board or a value is out of range.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        if rows.len() != BOARD_HEIGHT as usize {
            return None;
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_WIDTH as usize || row.iter().any(|&c| c > MAX_CELL) {
                return None;
            }
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        Some(board)
    }

    /// Convert to 2D vector for display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks_exact(BOARD_WIDTH as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
