//! Board module - the fixed-size game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a color.
//! Uses a flat array for cache locality; the whole board is a `Copy` value, so
//! every operation that changes it returns a new board and leaves the input
//! untouched.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from string rows, bottom-aligned
    ///
    /// Each row is `BOARD_WIDTH` characters after whitespace is dropped; `.`
    /// is empty and any other character is an occupied cell of `fill`. Rows
    /// are placed so the last one lands on the bottom row. Panics on
    /// malformed input.
    pub fn from_rows(rows: &[&str], fill: Color) -> Self {
        assert!(rows.len() <= HEIGHT, "too many rows: {}", rows.len());
        let mut board = Self::new();
        let top = HEIGHT - rows.len();
        for (i, row) in rows.iter().enumerate() {
            let row: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(row.len(), WIDTH, "row {} is not {} wide", i, WIDTH);
            for (x, ch) in row.into_iter().enumerate() {
                if ch != '.' {
                    board.cells[(top + i) * WIDTH + x] = Some(fill);
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
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

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Return a copy of this board with one cell replaced
    ///
    /// Out-of-bounds coordinates return the board unchanged.
    pub fn with_cell(&self, x: i8, y: i8, cell: Cell) -> Self {
        let mut next = *self;
        if let Some(idx) = Self::index(x, y) {
            next.cells[idx] = cell;
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`, left to right
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write a piece's color into every in-bounds cell its shape occupies
    ///
    /// Sub-cells outside the board are skipped; a validated placement never
    /// produces any.
    pub fn merge(&self, piece: &Piece) -> Self {
        let mut next = *self;
        for (x, y) in piece.cells() {
            if let Some(idx) = Self::index(x, y) {
                next.cells[idx] = Some(piece.color);
            }
        }
        next
    }

    /// Remove all full rows and pad the top with empty rows
    ///
    /// Returns the compacted board and the number of rows removed. Surviving
    /// rows keep their relative order. Two-pointer scan from the bottom, no
    /// allocation.
    pub fn clear_full_rows(&self) -> (Self, usize) {
        let mut next = Self::new();
        let mut write_y = HEIGHT;
        let mut cleared = 0;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                let src = read_y * WIDTH;
                let dst = write_y * WIDTH;
                next.cells[dst..dst + WIDTH].copy_from_slice(&self.cells[src..src + WIDTH]);
            }
        }

        (next, cleared)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
