//! Game state module - the pure state machine
//!
//! This module ties together the board, piece factory, collision check,
//! rotation and scoring. Every transition borrows the current state and returns
//! the next one by value; a rejected input returns a state equal to the input.
//! Nothing here keeps time: how often [`GameState::move_down`] fires is up to
//! the driver.

use tracing::{debug, trace};

use crate::board::Board;
use crate::collision::{is_valid_placement, landing_y};
use crate::piece::{create_random_piece, Piece};
use crate::rng::PieceSource;
use crate::rotation::rotate;
use crate::scoring::line_clear_score;
use crate::types::GameAction;

/// Coarse lifecycle phase, derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Active,
    Paused,
    GameOver,
}

/// Emitted when a piece locks into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: usize,
    pub points: u32,
    pub game_over: bool,
}

/// Result of applying one action: the next state plus the lock it caused, if any
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub lock: Option<LockEvent>,
}

impl Step {
    fn unchanged(state: GameState) -> Self {
        Self { state, lock: None }
    }
}

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    game_over: bool,
    paused: bool,
}

impl GameState {
    /// Start a game: empty board, two fresh pieces, score 0
    pub fn new(source: &mut dyn PieceSource) -> Self {
        let current = create_random_piece(source);
        let next = create_random_piece(source);
        debug!(current = ?current.kind, next = ?next.kind, "new game");

        Self {
            board: Board::new(),
            current: Some(current),
            next: Some(next),
            score: 0,
            game_over: false,
            paused: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Active
        }
    }

    /// Replace the board (scenario setup and replays)
    pub fn with_board(self, board: Board) -> Self {
        Self { board, ..self }
    }

    /// Replace the current piece
    pub fn with_current(self, current: Option<Piece>) -> Self {
        Self { current, ..self }
    }

    /// Replace the next piece
    pub fn with_next(self, next: Option<Piece>) -> Self {
        Self { next, ..self }
    }

    /// Replace the score
    pub fn with_score(self, score: u32) -> Self {
        Self { score, ..self }
    }

    /// The current piece if the game accepts piece input right now
    fn playable_piece(&self) -> Option<Piece> {
        if self.game_over || self.paused {
            return None;
        }
        self.current
    }

    /// Row the current piece would land on if hard-dropped
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.current?;
        Some(landing_y(&self.board, &piece))
    }

    /// Shift the current piece horizontally by `dx` if the target is free
    fn shift(&self, dx: i8) -> GameState {
        let Some(piece) = self.playable_piece() else {
            return *self;
        };

        let Some(x) = piece.x.checked_add(dx) else {
            return *self;
        };
        if is_valid_placement(&self.board, &piece, x, piece.y) {
            GameState {
                current: Some(piece.at(x, piece.y)),
                ..*self
            }
        } else {
            trace!(dx, "shift rejected");
            *self
        }
    }

    pub fn move_left(&self) -> GameState {
        self.shift(-1)
    }

    pub fn move_right(&self) -> GameState {
        self.shift(1)
    }

    /// Soft drop: fall one row, or lock if the piece has landed
    pub fn move_down(&self, source: &mut dyn PieceSource) -> GameState {
        self.step_down(source).state
    }

    fn step_down(&self, source: &mut dyn PieceSource) -> Step {
        let Some(piece) = self.playable_piece() else {
            return Step::unchanged(*self);
        };

        if let Some(y) = piece.y.checked_add(1) {
            if is_valid_placement(&self.board, &piece, piece.x, y) {
                return Step::unchanged(GameState {
                    current: Some(piece.at(piece.x, y)),
                    ..*self
                });
            }
        }

        self.lock(piece, source)
    }

    /// Rotate clockwise in place; rejected if the rotated shape does not fit
    pub fn rotate(&self) -> GameState {
        let Some(piece) = self.playable_piece() else {
            return *self;
        };

        let rotated = rotate(&piece);
        if is_valid_placement(&self.board, &rotated, rotated.x, rotated.y) {
            GameState {
                current: Some(rotated),
                ..*self
            }
        } else {
            trace!(kind = ?piece.kind, "rotation rejected");
            *self
        }
    }

    /// Drop to the lowest reachable row and lock immediately
    pub fn hard_drop(&self, source: &mut dyn PieceSource) -> GameState {
        self.step_hard_drop(source).state
    }

    fn step_hard_drop(&self, source: &mut dyn PieceSource) -> Step {
        let Some(piece) = self.playable_piece() else {
            return Step::unchanged(*self);
        };

        let y = landing_y(&self.board, &piece);
        self.lock(piece.at(piece.x, y), source)
    }

    /// Merge `piece`, clear rows, score, then advance the queue or end the game
    fn lock(&self, piece: Piece, source: &mut dyn PieceSource) -> Step {
        let (board, lines_cleared) = self.board.merge(&piece).clear_full_rows();
        let points = line_clear_score(lines_cleared);
        let score = self.score.saturating_add(points);

        // Locking while still touching the spawn row ends the game.
        let game_over = piece.y <= 0;

        let state = if game_over {
            debug!(score, y = piece.y, "game over");
            GameState {
                board,
                current: None,
                next: None,
                score,
                game_over: true,
                ..*self
            }
        } else {
            let next = create_random_piece(source);
            GameState {
                board,
                current: self.next,
                next: Some(next),
                score,
                ..*self
            }
        };

        debug!(
            kind = ?piece.kind,
            x = piece.x,
            y = piece.y,
            lines_cleared,
            points,
            "piece locked"
        );

        Step {
            state,
            lock: Some(LockEvent {
                lines_cleared,
                points,
                game_over,
            }),
        }
    }

    /// Flip the paused flag, even after game over
    pub fn toggle_pause(&self) -> GameState {
        GameState {
            paused: !self.paused,
            ..*self
        }
    }

    /// Throw everything away and start over
    pub fn reset(&self, source: &mut dyn PieceSource) -> GameState {
        GameState::new(source)
    }

    /// Apply a driver action
    pub fn apply(&self, action: GameAction, source: &mut dyn PieceSource) -> GameState {
        self.step(action, source).state
    }

    /// Apply a driver action and report whether it locked a piece
    pub fn step(&self, action: GameAction, source: &mut dyn PieceSource) -> Step {
        match action {
            GameAction::MoveLeft => Step::unchanged(self.move_left()),
            GameAction::MoveRight => Step::unchanged(self.move_right()),
            GameAction::MoveDown => self.step_down(source),
            GameAction::Rotate => Step::unchanged(self.rotate()),
            GameAction::HardDrop => self.step_hard_drop(source),
            GameAction::TogglePause => Step::unchanged(self.toggle_pause()),
            GameAction::Reset => Step::unchanged(self.reset(source)),
        }
    }
}
