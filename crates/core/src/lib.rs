//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every game rule and the state machine that applies them.
//! It has **zero dependencies** on rendering, input or timers, making it:
//!
//! - **Pure**: every transition maps a state (plus its inputs) to a new state
//! - **Deterministic**: a seeded [`UniformPieces`] or a fixed [`PieceSequence`] replays a game exactly
//! - **Value-typed**: [`Board`] and [`GameState`] are `Copy`; nothing is mutated in place
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog (square matrices and colors for the seven kinds)
//! - [`board`]: 10x20 grid with merge and full-row compaction
//! - [`piece`]: piece instances and the random piece factory
//! - [`collision`]: the single placement legality check
//! - [`rotation`]: 90° clockwise matrix rotation
//! - [`rng`]: swappable piece sources
//! - [`scoring`]: per-lock line clear points
//! - [`game_state`]: the state machine
//! - [`session`]: driver-side holder of the current state
//! - [`snapshot`]: serializable views for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each new piece is one of seven kinds with equal probability
//! - **Naive rotation**: clockwise only, rejected outright if it does not fit (no wall kicks)
//! - **Immediate lock**: a piece locks as soon as a downward move fails
//! - **Scoring**: 0 / 100 / 300 / 500 / 800 for 0-4 lines in one lock
//! - **Game over**: a piece locks with its top at row 0 or above
//!
//! # Example
//!
//! ```
//! use tetromino_core::{GameState, PieceSequence};
//! use tetromino_core::types::PieceKind;
//!
//! let mut source = PieceSequence::repeat(PieceKind::O);
//! let state = GameState::new(&mut source);
//!
//! // Transitions return new states
//! let moved = state.move_left();
//! assert_eq!(moved.current().unwrap().x, 3);
//!
//! let dropped = moved.hard_drop(&mut source);
//! assert!(dropped.board().is_occupied(3, 19));
//! assert_eq!(dropped.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{drop_distance, is_valid_placement, landing_y};
pub use game_state::{GameState, LockEvent, Phase, Step};
pub use piece::{create_random_piece, Piece};
pub use pieces::{color_of, shape_of, Shape};
pub use rng::{PieceSequence, PieceSource, SimpleRng, UniformPieces};
pub use rotation::{rotate, rotate_shape};
pub use scoring::line_clear_score;
pub use session::{Outcome, Session};
pub use snapshot::{GameSnapshot, PieceSnapshot};
