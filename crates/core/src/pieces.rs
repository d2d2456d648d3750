//! Pieces module - the shape catalog
//!
//! Every piece kind owns one immutable square matrix (2x2, 3x3 or 4x4) in which
//! `true` marks an occupied sub-cell. Pieces copy the matrix out of the catalog;
//! rotation builds a new matrix and never touches the catalog entry.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest matrix side length in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of an occupied sub-cell relative to the bounding box, as `(x, y)`
pub type MinoOffset = (i8, i8);

/// Square boolean shape matrix
///
/// Stored in a fixed 4x4 array; only the top-left `size x size` block is
/// meaningful. Indexing is `[row][column]`, i.e. `[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

const X: bool = true;
const O: bool = false;

const SHAPE_I: Shape = Shape::new(
    4,
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
);
const SHAPE_J: Shape = Shape::new(
    3,
    [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
);
const SHAPE_L: Shape = Shape::new(
    3,
    [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
);
const SHAPE_O: Shape = Shape::new(
    2,
    [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
);
const SHAPE_S: Shape = Shape::new(
    3,
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
);
const SHAPE_T: Shape = Shape::new(
    3,
    [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
);
const SHAPE_Z: Shape = Shape::new(
    3,
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
);

impl Shape {
    /// Shape of side `size` from a full 4x4 matrix
    ///
    /// Cells outside the `size x size` block must be empty.
    pub const fn new(size: u8, cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Build a shape from string rows, `X` marking occupied sub-cells
    ///
    /// Panics if the rows do not form a square of side 1..=4. Test fixture
    /// helper; the catalog itself is `const`.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape size {} out of range",
            size
        );
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(row.len(), size, "shape row {} is not {} wide", y, size);
            for (x, ch) in row.into_iter().enumerate() {
                cells[y][x] = ch == 'X';
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Empty matrix of the given side length
    pub(crate) fn empty(size: usize) -> Self {
        debug_assert!(size <= MAX_SHAPE_SIZE);
        Self {
            size: size as u8,
            cells: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether sub-cell (`x`, `y`) is occupied; out-of-matrix reads are empty
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.cells[y][x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, filled: bool) {
        self.cells[y][x] = filled;
    }

    /// Offsets of all occupied sub-cells in row-major order
    ///
    /// This is stack-only and does not allocate.
    pub fn occupied(&self) -> ArrayVec<MinoOffset, 16> {
        let mut out = ArrayVec::new();
        for y in 0..self.size() {
            for x in 0..self.size() {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rows of the matrix (each `size` wide), for previews
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.size()]
            .iter()
            .map(move |row| &row[..self.size()])
    }
}

/// Get the base (unrotated) shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => SHAPE_I,
        PieceKind::J => SHAPE_J,
        PieceKind::L => SHAPE_L,
        PieceKind::O => SHAPE_O,
        PieceKind::S => SHAPE_S,
        PieceKind::T => SHAPE_T,
        PieceKind::Z => SHAPE_Z,
    }
}

/// Get the display color for a piece kind
pub fn color_of(kind: PieceKind) -> Color {
    kind.color()
}
