//! Frame-loop driver.
//!
//! Owns the game, the sound player and the drawing buffers. The binary feeds
//! it key events and elapsed time; everything here is terminal-free so the
//! whole loop can run headless in tests.

use crossterm::event::KeyEvent;
use log::{debug, info};

use crate::audio::SoundPlayer;
use crate::core::{GameEvent, GameSnapshot, GameState};
use crate::input::{handle_key_event, should_quit};
use crate::term::{FrameBuffer, GameView, Viewport};

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The player asked to leave
    Quit,
    /// Mapped to a game action (accepted or not by the game)
    Applied,
    /// Not a game key
    Ignored,
}

pub struct App<P: SoundPlayer> {
    game: GameState,
    player: P,
    view: GameView,
    snapshot: GameSnapshot,
    fb: FrameBuffer,
    game_over_logged: bool,
}

impl<P: SoundPlayer> App<P> {
    /// Start a game with `seed`; the first piece is already falling.
    pub fn new(seed: u32, player: P) -> Self {
        Self::with_game(GameState::new(seed), player)
    }

    /// Drive an existing game, starting it if needed.
    pub fn with_game(mut game: GameState, player: P) -> Self {
        game.start();
        let mut app = Self {
            game,
            player,
            view: GameView::default(),
            snapshot: GameSnapshot::default(),
            fb: FrameBuffer::new(0, 0),
            game_over_logged: false,
        };
        app.dispatch_events();
        app
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if should_quit(key) {
            return KeyOutcome::Quit;
        }
        let Some(action) = handle_key_event(key) else {
            return KeyOutcome::Ignored;
        };

        let accepted = self.game.apply_action(action);
        debug!("action {} accepted={}", action.as_str(), accepted);
        self.dispatch_events();
        KeyOutcome::Applied
    }

    /// Advance one frame by `elapsed_ms`. Returns whether gravity stepped.
    pub fn frame(&mut self, elapsed_ms: u32) -> bool {
        let stepped = self.game.tick(elapsed_ms);
        self.dispatch_events();
        stepped
    }

    /// Draw the current state for a terminal of `viewport` size.
    pub fn render(&mut self, viewport: Viewport) -> &mut FrameBuffer {
        self.game.snapshot_into(&mut self.snapshot);
        self.view.render_into(&self.snapshot, viewport, &mut self.fb);
        &mut self.fb
    }

    fn dispatch_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::Sound(effect) => self.player.play(effect),
                GameEvent::ScoreChanged(score) => info!("score {}", score),
            }
        }

        if self.game.game_over() && !self.game_over_logged {
            self.game_over_logged = true;
            info!(
                "game over: score {} lines {}",
                self.game.score(),
                self.game.lines()
            );
        }
    }
}
