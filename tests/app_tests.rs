//! Headless frame loop: key events in, sounds and frames out

use blockfall::audio::RecordingPlayer;
use blockfall::core::{Board, GameState};
use blockfall::term::Viewport;
use blockfall::types::{PieceKind, SoundEffect, DROP_INTERVAL_MS, FRAME_MS};
use blockfall::{App, KeyOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn release_events_do_nothing() {
    let mut app = App::new(5, RecordingPlayer::new());
    let before = *app.game().active().unwrap();

    assert_eq!(
        app.handle_key(key(KeyCode::Left, KeyEventKind::Release)),
        KeyOutcome::Ignored
    );
    assert_eq!(*app.game().active().unwrap(), before);
}

#[test]
fn held_arrow_keeps_moving_until_the_wall() {
    let mut game = GameState::new(5);
    game.spawn(PieceKind::O);
    let mut app = App::with_game(game, RecordingPlayer::new());

    app.handle_key(key(KeyCode::Right, KeyEventKind::Press));
    for _ in 0..10 {
        app.handle_key(key(KeyCode::Right, KeyEventKind::Repeat));
    }

    assert_eq!(app.game().active().unwrap().x, 8);
    // 4 -> 8 is four successful moves; the rest hit the wall silently.
    assert_eq!(app.player().played(), &[SoundEffect::Move; 4]);
}

#[test]
fn frames_drive_gravity_and_lock_sounds() {
    let mut game = GameState::new(5);
    game.spawn(PieceKind::O);
    let mut app = App::with_game(game, RecordingPlayer::new());

    // 20 gravity steps: 18 moves down, then a lock.
    let mut elapsed = 0;
    while app.game().board().filled_count() == 0 {
        app.frame(FRAME_MS);
        elapsed += FRAME_MS;
        assert!(elapsed < 30 * DROP_INTERVAL_MS, "piece never locked");
    }

    assert_eq!(app.player().played(), &[SoundEffect::Drop]);
    assert!(app.game().board().is_occupied(4, 19));
}

#[test]
fn clearing_a_row_plays_drop_then_clear() {
    let board = Board::from_ascii(&["########.."]);
    let mut game = GameState::with_board(5, board);
    game.spawn(PieceKind::O);
    let mut app = App::with_game(game, RecordingPlayer::new());

    for _ in 0..4 {
        app.handle_key(key(KeyCode::Right, KeyEventKind::Press));
    }
    assert_eq!(app.game().active().unwrap().x, 8);
    app.player_mut().clear();

    let mut steps = 0;
    while app.game().lines() == 0 {
        app.frame(DROP_INTERVAL_MS + 1);
        steps += 1;
        assert!(steps < 40, "row never cleared");
    }

    assert_eq!(app.game().score(), 100);
    assert_eq!(app.player().played(), &[SoundEffect::Drop, SoundEffect::Clear]);
    // The top half of the O is all that is left.
    assert!(app.game().board().is_occupied(8, 19));
    assert!(app.game().board().is_occupied(9, 19));
    assert_eq!(app.game().board().filled_count(), 2);
    assert!(!app.game().particles().is_empty());
}

#[test]
fn rendering_after_game_over_keeps_working() {
    let mut game = GameState::with_board(5, Board::from_ascii(&["##########"; 20]));
    game.spawn(PieceKind::S);
    let mut app = App::with_game(game, RecordingPlayer::new());

    assert!(!app.frame(5 * DROP_INTERVAL_MS));
    let fb = app.render(Viewport::new(40, 24));
    assert!((0..fb.height()).any(|y| fb.row_text(y).contains("GAME OVER")));
}
