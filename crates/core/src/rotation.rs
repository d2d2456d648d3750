//! Rotation module - 90° clockwise matrix rotation
//!
//! Rotation is purely geometric: it never checks the board and never shifts
//! the piece. Callers validate the rotated piece at its unchanged position and
//! reject the rotation outright if it does not fit (no wall kicks).

use crate::piece::Piece;
use crate::pieces::Shape;

/// Rotate a shape matrix 90° clockwise
///
/// Source cell (y, x) lands on destination cell (x, N-1-y).
pub fn rotate_shape(shape: &Shape) -> Shape {
    let n = shape.size();
    let mut rotated = Shape::empty(n);
    for y in 0..n {
        for x in 0..n {
            rotated.set(n - 1 - y, x, shape.is_filled(x, y));
        }
    }
    rotated
}

/// Return `piece` with its shape rotated clockwise; position, kind and color are kept
pub fn rotate(piece: &Piece) -> Piece {
    piece.with_shape(rotate_shape(&piece.shape))
}
