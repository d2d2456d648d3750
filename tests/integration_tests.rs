//! Integration tests for the driver loop: session dispatch, ticks and snapshots

use tetromino::core::{GameSnapshot, Outcome, PieceSequence, Session, UniformPieces};
use tetromino::types::{GameAction, PieceKind};

#[test]
fn test_game_lifecycle() {
    let session = Session::new(UniformPieces::new(12345));
    let state = session.state();

    assert!(state.current().is_some());
    assert!(state.next().is_some());
    assert!(!state.game_over());
    assert!(!state.paused());
    assert_eq!(state.score(), 0);
}

#[test]
fn test_ticks_drop_then_lock() {
    let mut session = Session::new(PieceSequence::new(vec![PieceKind::O, PieceKind::T]));

    for _ in 0..18 {
        assert_eq!(session.tick(), Outcome::Applied);
    }
    assert_eq!(session.state().current().unwrap().y, 18);
    assert_eq!(
        session.tick(),
        Outcome::Locked {
            lines_cleared: 0,
            game_over: false
        }
    );
    assert_eq!(session.state().current().unwrap().kind, PieceKind::T);
}

#[test]
fn test_game_pause() {
    let mut session = Session::new(UniformPieces::new(12345));

    assert_eq!(session.dispatch(GameAction::TogglePause), Outcome::Applied);
    assert!(session.state().paused());

    let before = *session.state();
    assert_eq!(session.dispatch(GameAction::MoveLeft), Outcome::Rejected);
    assert_eq!(session.dispatch(GameAction::HardDrop), Outcome::Rejected);
    assert_eq!(session.tick(), Outcome::Rejected);
    assert_eq!(*session.state(), before);

    session.dispatch(GameAction::TogglePause);
    assert!(!session.state().paused());
}

#[test]
fn test_line_clear_through_session() {
    let mut session = Session::new(PieceSequence::new(vec![
        PieceKind::O,
        PieceKind::O,
        PieceKind::O,
        PieceKind::O,
        PieceKind::O,
    ]));

    // O pieces at x = 0, 2, 4, 6, 8 fill the bottom two rows completely.
    let placements: [i8; 5] = [0, 2, 4, 6, 8];
    let mut last = Outcome::Rejected;
    for target in placements {
        let x = session.state().current().unwrap().x;
        let action = if target < x {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        for _ in 0..(target - x).abs() {
            assert_eq!(session.dispatch(action), Outcome::Applied);
        }
        last = session.dispatch(GameAction::HardDrop);
    }

    assert_eq!(
        last,
        Outcome::Locked {
            lines_cleared: 2,
            game_over: false
        }
    );
    assert_eq!(session.state().score(), 300);
    assert_eq!(session.state().board().filled_count(), 0);
}

#[test]
fn test_reset_after_game_over() {
    let mut session = Session::new(PieceSequence::repeat(PieceKind::O));
    while !session.state().game_over() {
        session.dispatch(GameAction::HardDrop);
    }
    assert!(session.state().current().is_none());

    assert_eq!(session.dispatch(GameAction::Reset), Outcome::Applied);
    assert!(!session.state().game_over());
    assert_eq!(session.state().board().filled_count(), 0);
    assert_eq!(session.state().current().unwrap().kind, PieceKind::O);
}

#[test]
fn test_snapshot_json_shape() {
    let session = Session::new(PieceSequence::new(vec![PieceKind::T, PieceKind::I]));
    let json = session.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["board"].as_array().unwrap().len(), 20);
    assert_eq!(value["board"][0].as_array().unwrap().len(), 10);
    assert!(value["board"][19][0].is_null());
    assert_eq!(value["current"]["kind"], "t");
    assert_eq!(value["current"]["x"], 4);
    assert_eq!(value["current"]["cells"].as_array().unwrap().len(), 4);
    assert_eq!(value["next"]["kind"], "i");
    assert_eq!(value["score"], 0);
    assert_eq!(value["game_over"], false);
    assert_eq!(value["paused"], false);
    assert_eq!(value["phase"], "active");
}

#[test]
fn test_snapshot_after_lock_has_colors() {
    let mut session = Session::new(PieceSequence::repeat(PieceKind::Z));
    session.dispatch(GameAction::HardDrop);

    let snap: GameSnapshot = session.snapshot();
    let value = serde_json::to_value(&snap).unwrap();
    // Z base shape XX. / .XX lands on rows 18-19 at x=4
    assert_eq!(value["board"][18][4], "red");
    assert_eq!(value["board"][19][6], "red");
    assert!(value["board"][18][6].is_null());
}

#[test]
fn test_snapshot_game_over_has_no_pieces() {
    let mut session = Session::new(PieceSequence::repeat(PieceKind::I));
    while !session.state().game_over() {
        session.dispatch(GameAction::HardDrop);
    }
    let snap = session.snapshot();

    assert!(snap.current.is_none());
    assert!(snap.next.is_none());
    assert!(snap.ghost_y.is_none());
    assert!(!snap.playable());
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["phase"], "gameOver");
}
