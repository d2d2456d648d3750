//! Session - the driver-side owner of the current game
//!
//! The state machine itself is a set of pure functions. A session is the one
//! place that stores "the current state": it applies exactly one transition per
//! call and replaces its state with the result. Because every call takes
//! `&mut self`, transitions are serialized by construction.

use tracing::debug;

use crate::game_state::{GameState, Step};
use crate::rng::{PieceSource, UniformPieces};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// What a dispatched action did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input ignored; state unchanged
    Rejected,
    /// State changed without a lock
    Applied,
    /// A piece locked (possibly ending the game)
    Locked { lines_cleared: usize, game_over: bool },
}

/// Current game plus the piece source feeding it
#[derive(Debug, Clone)]
pub struct Session<S: PieceSource = UniformPieces> {
    state: GameState,
    source: S,
}

impl<S: PieceSource> Session<S> {
    /// Start a new game drawing pieces from `source`
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        Self { state, source }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    /// Apply one action and store the resulting state
    pub fn dispatch(&mut self, action: GameAction) -> Outcome {
        let Step { state, lock } = self.state.step(action, &mut self.source);

        let outcome = match lock {
            Some(event) => Outcome::Locked {
                lines_cleared: event.lines_cleared,
                game_over: event.game_over,
            },
            None if state == self.state => Outcome::Rejected,
            None => Outcome::Applied,
        };

        if outcome == Outcome::Rejected {
            debug!(action = action.as_str(), "action rejected");
        }

        self.state = state;
        outcome
    }

    /// Automatic drop fired by the driver's timer
    ///
    /// Does nothing while paused or after game over.
    pub fn tick(&mut self) -> Outcome {
        if self.state.paused() || self.state.game_over() {
            return Outcome::Rejected;
        }
        self.dispatch(GameAction::MoveDown)
    }

    /// Apply actions in order and return how many were dispatched
    ///
    /// After game over only `Reset` and `TogglePause` are dispatched; every
    /// other action is skipped and not counted.
    pub fn dispatch_all<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = GameAction>,
    {
        let mut applied = 0;
        for action in actions {
            if self.state.game_over()
                && !matches!(action, GameAction::Reset | GameAction::TogglePause)
            {
                continue;
            }
            self.dispatch(action);
            applied += 1;
        }
        applied
    }
}

impl Default for Session<UniformPieces> {
    fn default() -> Self {
        Self::new(UniformPieces::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PieceSequence;
    use crate::types::PieceKind;

    #[test]
    fn test_dispatch_outcomes() {
        let mut session = Session::new(PieceSequence::repeat(PieceKind::O));

        assert_eq!(session.dispatch(GameAction::MoveLeft), Outcome::Applied);
        assert_eq!(session.dispatch(GameAction::MoveDown), Outcome::Applied);
        assert_eq!(
            session.dispatch(GameAction::HardDrop),
            Outcome::Locked {
                lines_cleared: 0,
                game_over: false
            }
        );
    }

    #[test]
    fn test_symmetric_rotation_reports_rejected() {
        // Rotating O yields an equal state, which is indistinguishable from a no-op.
        let mut session = Session::new(PieceSequence::repeat(PieceKind::O));
        let before = *session.state();
        assert_eq!(session.dispatch(GameAction::Rotate), Outcome::Rejected);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_dispatch_all_stops_at_game_over() {
        let mut session = Session::new(PieceSequence::repeat(PieceKind::I));
        let actions = std::iter::repeat(GameAction::HardDrop).take(100);
        let applied = session.dispatch_all(actions);

        assert!(session.state().game_over());
        assert!(applied < 100);
        assert_eq!(session.dispatch(GameAction::HardDrop), Outcome::Rejected);
    }

    #[test]
    fn test_dispatch_all_after_game_over_keeps_pause_and_reset() {
        let mut session = Session::new(PieceSequence::repeat(PieceKind::I));
        while !session.state().game_over() {
            session.dispatch(GameAction::HardDrop);
        }

        let applied = session.dispatch_all([
            GameAction::MoveLeft,
            GameAction::TogglePause,
            GameAction::HardDrop,
        ]);
        assert_eq!(applied, 1);
        assert!(session.state().paused());
        assert!(session.state().game_over());

        let applied = session.dispatch_all([GameAction::Rotate, GameAction::Reset]);
        assert_eq!(applied, 1);
        assert!(!session.state().game_over());
        assert!(!session.state().paused());
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut session = Session::new(PieceSequence::repeat(PieceKind::T));
        session.dispatch(GameAction::TogglePause);
        let before = *session.state();

        assert_eq!(session.tick(), Outcome::Rejected);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_reset_draws_from_source() {
        let mut session = Session::new(PieceSequence::new(vec![
            PieceKind::I,
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
        ]));
        session.dispatch(GameAction::Reset);

        assert_eq!(session.state().current().unwrap().kind, PieceKind::L);
        assert_eq!(session.state().next().unwrap().kind, PieceKind::S);
        assert_eq!(session.source().drawn(), 4);
    }
}
