//! Tetromino (workspace facade crate).
//!
//! Keeps a single `tetromino::{core,types}` entry point while the implementation
//! lives in dedicated crates under `crates/`.

pub mod config;

pub use tetromino_core as core;
pub use tetromino_types as types;
