//! Piece module - falling piece instances and the piece factory

use arrayvec::ArrayVec;

use crate::pieces::{color_of, shape_of, MinoOffset, Shape};
use crate::rng::PieceSource;
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

/// A piece instance: kind, current rotation matrix, position and color
///
/// `(x, y)` is the top-left corner of the shape's bounding box in board
/// coordinates. Either component may be negative or past the board edge while
/// a placement is being probed; only validated placements are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Color,
}

impl Piece {
    /// Create a piece of `kind` with its base shape at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
            color: color_of(kind),
        }
    }

    /// Same piece moved to (`x`, `y`)
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same piece with a different shape matrix
    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }

    /// Absolute board coordinates of every occupied sub-cell
    pub fn cells(&self) -> ArrayVec<MinoOffset, 16> {
        self.cells_at(self.x, self.y)
    }

    /// Absolute coordinates the shape would cover with its corner at (`x`, `y`)
    ///
    /// Coordinates saturate at the `i8` range. A saturated cell stays on the
    /// same side of the board as its true position.
    pub fn cells_at(&self, x: i8, y: i8) -> ArrayVec<MinoOffset, 16> {
        self.shape
            .occupied()
            .into_iter()
            .map(|(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
            .collect()
    }
}

/// Draw a kind from `source` and spawn it
///
/// No placement check happens here; the first check is the next attempted move.
pub fn create_random_piece(source: &mut dyn PieceSource) -> Piece {
    Piece::spawn(source.next_kind())
}
