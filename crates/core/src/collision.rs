//! Collision module - the single legality predicate for placements
//!
//! Side walls and the floor are hard bounds. The top is open: sub-cells above
//! row 0 are treated as empty airspace so pieces can sit partly above the
//! visible board while spawning.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece`'s shape fits with its corner at (`x`, `y`)
///
/// Only the shape is read from `piece`; its own position is ignored.
pub fn is_valid_placement(board: &Board, piece: &Piece, x: i8, y: i8) -> bool {
    piece.shape.occupied().iter().all(|&(dx, dy)| {
        let bx = i32::from(x) + i32::from(dx);
        let by = i32::from(y) + i32::from(dy);
        if bx < 0 || bx >= i32::from(BOARD_WIDTH) || by >= i32::from(BOARD_HEIGHT) {
            return false;
        }
        // In-bounds here, so both fit in i8
        by < 0 || !board.is_occupied(bx as i8, by as i8)
    })
}

/// Number of rows `piece` can fall straight down from where it is
///
/// A piece far above the board may fall more than `i8::MAX` rows.
pub fn drop_distance(board: &Board, piece: &Piece) -> u8 {
    let mut distance: u8 = 0;
    loop {
        let below = i32::from(piece.y) + i32::from(distance) + 1;
        match i8::try_from(below) {
            Ok(y) if is_valid_placement(board, piece, piece.x, y) => distance += 1,
            _ => return distance,
        }
    }
}

/// Row the piece would rest on after a hard drop
pub fn landing_y(board: &Board, piece: &Piece) -> i8 {
    let y = i32::from(piece.y) + i32::from(drop_distance(board, piece));
    // Either the start row or a validated row above the floor
    y as i8
}
