//! Read-only views of a [`GameState`] for renderers
//!
//! A snapshot is a detached, serializable copy: it borrows nothing from the
//! state and can be handed to another thread or written out as JSON.

use serde::Serialize;

use crate::game_state::{GameState, Phase};
use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute board coordinates of the occupied sub-cells, as `[x, y]`
    pub cells: Vec<[i8; 2]>,
    /// Shape matrix rows; `true` is occupied
    pub shape: Vec<Vec<bool>>,
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            cells: piece.cells().iter().map(|&(x, y)| [x, y]).collect(),
            shape: piece.shape.rows().map(|row| row.to_vec()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Board rows top to bottom; `null` is empty, otherwise the color name
    pub board: Vec<Vec<Cell>>,
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            board: state.board().rows().map(|row| row.to_vec()).collect(),
            current: state.current().map(PieceSnapshot::from),
            next: state.next().map(PieceSnapshot::from),
            ghost_y: state.ghost_y(),
            score: state.score(),
            game_over: state.game_over(),
            paused: state.paused(),
            phase: state.phase(),
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Board with the current piece painted on top
    ///
    /// Sub-cells above the visible board are dropped.
    pub fn composited_board(&self) -> Vec<Vec<Cell>> {
        let mut board = self.board.clone();
        if let Some(current) = &self.current {
            let color = current.kind.color();
            for &[x, y] in &current.cells {
                if x >= 0 && (x as usize) < BOARD_WIDTH as usize && y >= 0 {
                    if let Some(row) = board.get_mut(y as usize) {
                        row[x as usize] = Some(color);
                    }
                }
            }
        }
        board
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self::capture(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PieceSequence;
    use crate::types::Color;

    #[test]
    fn test_capture_new_game() {
        let mut source = PieceSequence::new(vec![PieceKind::O, PieceKind::I]);
        let state = GameState::new(&mut source);
        let snap = GameSnapshot::capture(&state);

        assert_eq!(snap.board.len(), 20);
        assert!(snap.board.iter().all(|row| row.len() == 10));
        assert_eq!(snap.current.as_ref().unwrap().kind, PieceKind::O);
        assert_eq!(snap.next.as_ref().unwrap().shape.len(), 4);
        assert_eq!(snap.ghost_y, Some(18));
        assert!(snap.playable());
    }

    #[test]
    fn test_composited_board_overlays_current() {
        let mut source = PieceSequence::repeat(PieceKind::O);
        let state = GameState::new(&mut source);
        let board = GameSnapshot::capture(&state).composited_board();

        assert_eq!(board[0][4], Some(Color::Yellow));
        assert_eq!(board[1][5], Some(Color::Yellow));
        assert_eq!(board[2][4], None);
    }
}
