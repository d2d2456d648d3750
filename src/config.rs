//! Command-line configuration for the headless driver.
//!
//! Every flag can also be supplied through a `TETROMINO_*` environment
//! variable; flags win when both are present.

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::{PieceSequence, PieceSource, UniformPieces};
use crate::types::{GameAction, PieceKind};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "tetromino-sim",
    about = "Play a scripted Tetris game headlessly and print the final state as JSON"
)]
pub struct SimConfig {
    /// Seed for the uniform piece generator (random when omitted)
    #[arg(long, env = "TETROMINO_SEED")]
    pub seed: Option<u32>,

    /// Fixed piece order instead of random pieces, e.g. "oitl" (repeats)
    #[arg(long, env = "TETROMINO_PIECES", conflicts_with = "seed")]
    pub pieces: Option<String>,

    /// Comma-separated actions, e.g. "left,left,rotate,hardDrop"
    #[arg(short, long, env = "TETROMINO_ACTIONS", default_value = "")]
    pub actions: String,

    /// Automatic drops to run after the script
    #[arg(short, long, env = "TETROMINO_TICKS", default_value_t = 0)]
    pub ticks: u32,

    /// Pretty-print the JSON snapshot
    #[arg(long)]
    pub pretty: bool,
}

impl SimConfig {
    /// Parsed action script
    pub fn action_script(&self) -> Result<Vec<GameAction>> {
        parse_actions(&self.actions)
    }

    /// Piece source described by the flags
    pub fn piece_source(&self) -> Result<Box<dyn PieceSource>> {
        if let Some(pieces) = &self.pieces {
            return Ok(Box::new(PieceSequence::new(parse_pieces(pieces)?)));
        }
        Ok(Box::new(match self.seed {
            Some(seed) => UniformPieces::new(seed),
            None => UniformPieces::from_entropy(),
        }))
    }
}

/// Parse a comma-separated action list; blank entries are skipped
pub fn parse_actions(script: &str) -> Result<Vec<GameAction>> {
    let mut actions = Vec::new();
    for (i, name) in script.split(',').enumerate() {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match GameAction::from_str(name) {
            Some(action) => actions.push(action),
            None => bail!("unknown action `{}` at position {}", name, i + 1),
        }
    }
    Ok(actions)
}

/// Parse a piece order such as "oitl" or "O, I, T"
pub fn parse_pieces(order: &str) -> Result<Vec<PieceKind>> {
    let mut kinds = Vec::new();
    for ch in order.chars().filter(|c| c.is_alphanumeric()) {
        match PieceKind::from_str(&ch.to_string()) {
            Some(kind) => kinds.push(kind),
            None => bail!("unknown piece kind `{}`", ch),
        }
    }
    if kinds.is_empty() {
        bail!("piece order is empty");
    }
    Ok(kinds)
}
