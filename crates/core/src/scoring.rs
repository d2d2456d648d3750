//! Scoring module - points awarded per lock
//!
//! One lock awards `SCORE_TABLE[min(lines, 4)]`. There are no level
//! multipliers, combos or drop bonuses.

use crate::types::SCORE_TABLE;

/// Points for clearing `lines` rows in a single lock
///
/// More than four rows cannot be cleared by one tetromino, but the lookup is
/// clamped to the four-line entry anyway.
pub fn line_clear_score(lines: usize) -> u32 {
    SCORE_TABLE[lines.min(SCORE_TABLE.len() - 1)]
}
