//! Game state module - the board/game loop
//!
//! Ties together the board, the active piece, the RNG and the particles.
//! Handles spawning, movement, rotation, merging, line clears, the drop
//! timer and the terminal game-over state.
//!
//! The state never talks to a screen or a speaker. Side effects are queued
//! as [`GameEvent`]s and drained by the frame loop after each call.

use crate::board::Board;
use crate::particle::{spawn_row_burst, Particle};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Output of the core towards the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A sound cue should play
    Sound(SoundEffect),
    /// The score changed; carries the new total
    ScoreChanged(u32),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    particles: Vec<Particle>,
    events: Vec<GameEvent>,
    score: u32,
    lines: u32,
    drop_timer_ms: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game on a pre-filled board (puzzles, tests, benches)
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            particles: Vec::new(),
            events: Vec::new(),
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Spawn a uniformly random piece at the spawn anchor
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_piece();
        self.spawn(kind)
    }

    /// Spawn a piece of `kind` at the spawn anchor.
    ///
    /// If it already collides the game is over; the piece stays visible and
    /// false is returned.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }
        self.started = true;

        let piece = Piece::spawn(kind);
        self.active = Some(piece);

        if self.board.collides(piece.shape(), piece.x, piece.y) {
            self.game_over = true;
            self.events.push(GameEvent::Sound(SoundEffect::GameOver));
            return false;
        }
        true
    }

    /// Check whether the active piece overlaps walls, floor or settled blocks
    pub fn collides(&self) -> bool {
        match self.active {
            Some(ref piece) => self.board.collides(piece.shape(), piece.x, piece.y),
            None => false,
        }
    }

    /// Try to translate the active piece.
    ///
    /// Returns false and leaves the piece untouched if the target collides
    /// or the game is over.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let (x, y) = (piece.x + dx, piece.y + dy);
        if self.board.collides(piece.shape(), x, y) {
            return false;
        }

        piece.x = x;
        piece.y = y;
        if dx != 0 {
            self.events.push(GameEvent::Sound(SoundEffect::Move));
        }
        true
    }

    /// Try to rotate the active piece 90° clockwise, undoing it on collision.
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        piece.rotate();
        if self.board.collides(piece.shape(), piece.x, piece.y) {
            piece.rotate_back();
            return false;
        }

        self.events.push(GameEvent::Sound(SoundEffect::Rotate));
        true
    }

    /// Write the active piece into the grid and drop it.
    ///
    /// Does nothing once the game is over; the piece that ended the game
    /// stays active.
    pub fn merge_piece(&mut self) {
        if self.game_over {
            return;
        }
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.merge(piece.shape(), piece.x, piece.y);
        self.events.push(GameEvent::Sound(SoundEffect::Drop));
    }

    /// Remove every full row, score it and throw particles from it.
    ///
    /// Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let cleared_rows = self.board.clear_full_rows();

        for &row in &cleared_rows {
            spawn_row_burst(row, &mut self.rng, &mut self.particles);
            self.score += LINE_SCORE;
            self.lines += 1;
            self.events.push(GameEvent::ScoreChanged(self.score));
        }

        if !cleared_rows.is_empty() {
            self.events.push(GameEvent::Sound(SoundEffect::Clear));
        }
        cleared_rows.len() as u32
    }

    /// Merge, clear lines, then spawn the next piece. No-op after game over.
    pub fn lock_piece(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        self.merge_piece();
        let cleared = self.clear_lines();
        self.spawn_piece();
        cleared
    }

    /// Advance one frame by `elapsed_ms`.
    ///
    /// Particles always animate. Gravity only runs while a game is in
    /// progress: once the accumulated time exceeds [`DROP_INTERVAL_MS`] the
    /// piece moves down one row, or locks if it cannot. Returns whether a
    /// gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.update_particles();

        if !self.started || self.game_over {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= DROP_INTERVAL_MS {
            return false;
        }

        if !self.move_piece(0, 1) {
            self.lock_piece();
        }
        self.drop_timer_ms = 0;
        true
    }

    /// Advance every particle one frame and drop the dead ones
    pub fn update_particles(&mut self) {
        self.particles.retain_mut(|p| p.update());
    }

    /// Apply a player action. Ignored once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.move_piece(0, 1),
            GameAction::Rotate => self.rotate_piece(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.particles.clear();
        out.particles.extend_from_slice(&self.particles);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.started = self.started;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sounds(state: &mut GameState) -> Vec<SoundEffect> {
        state
            .drain_events()
            .filter_map(|e| match e {
                GameEvent::Sound(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(12345);
        state.start();
        assert!(state.started);

        let piece = state.active.unwrap();
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.rotation, Rotation::North);

        // Starting twice does not respawn.
        state.start();
        assert_eq!(state.active.unwrap(), piece);
    }

    #[test]
    fn test_horizontal_move_plays_sound_vertical_does_not() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::T);

        assert!(state.move_piece(1, 0));
        assert_eq!(sounds(&mut state), vec![SoundEffect::Move]);

        assert!(state.move_piece(0, 1));
        assert!(sounds(&mut state).is_empty());
    }

    #[test]
    fn test_move_into_wall_is_rejected() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::I);

        let mut moved = 0;
        for _ in 0..10 {
            if state.move_piece(-1, 0) {
                moved += 1;
            }
        }
        assert_eq!(moved, SPAWN_X);
        assert_eq!(state.active.unwrap().x, 0);
    }

    #[test]
    fn test_rotate_reverts_on_collision() {
        // Vertical I against the right wall cannot turn horizontal.
        let mut state = GameState::new(1);
        state.spawn(PieceKind::I);
        assert!(state.rotate_piece());
        while state.move_piece(1, 0) {}
        let before = state.active.unwrap();
        state.drain_events().for_each(drop);

        assert!(!state.rotate_piece());
        assert_eq!(state.active.unwrap(), before);
        assert!(sounds(&mut state).is_empty());
    }

    #[test]
    fn test_rotate_plays_sound() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::T);
        assert!(state.rotate_piece());
        assert_eq!(sounds(&mut state), vec![SoundEffect::Rotate]);
        assert_eq!(state.active.unwrap().rotation, Rotation::East);
    }

    #[test]
    fn test_merge_plays_drop_sound() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::O);
        state.merge_piece();
        assert!(state.active.is_none());
        assert_eq!(state.board.filled_count(), 4);
        assert_eq!(sounds(&mut state), vec![SoundEffect::Drop]);
    }

    #[test]
    fn test_clear_lines_scores_and_spawns_particles() {
        let board = Board::from_ascii(&["##########", "##########", "#.#.#.#.#."]);
        let mut state = GameState::with_board(5, board);

        assert_eq!(state.clear_lines(), 2);
        assert_eq!(state.score, 2 * LINE_SCORE);
        assert_eq!(state.lines, 2);
        assert_eq!(
            state.particles.len(),
            2 * BOARD_WIDTH as usize * PARTICLES_PER_CELL
        );

        let events: Vec<_> = state.drain_events().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged(100),
                GameEvent::ScoreChanged(200),
                GameEvent::Sound(SoundEffect::Clear),
            ]
        );
        // The partial row dropped to the bottom.
        assert!(state.board.is_occupied(0, 19));
        assert!(!state.board.is_occupied(1, 19));
    }

    #[test]
    fn test_clear_lines_without_full_rows_is_silent() {
        let mut state = GameState::with_board(5, Board::from_ascii(&["#########."]));
        assert_eq!(state.clear_lines(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.drain_events().count(), 0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::T);

        assert!(!state.tick(DROP_INTERVAL_MS));
        assert_eq!(state.active.unwrap().y, 0);
        assert_eq!(state.drop_timer_ms, DROP_INTERVAL_MS);

        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, 1);
        assert_eq!(state.drop_timer_ms, 0);
    }

    #[test]
    fn test_tick_locks_grounded_piece() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::O);
        while state.move_piece(0, 1) {}

        assert!(state.tick(DROP_INTERVAL_MS + 1));
        assert!(state.board.is_occupied(4, 19));
        assert!(state.board.is_occupied(5, 18));
        // A fresh piece is falling again.
        assert_eq!(state.active.unwrap().y, SPAWN_Y);
        assert_eq!(state.drop_timer_ms, 0);
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut state = GameState::new(1);
        assert!(!state.tick(5000));
        assert!(state.active.is_none());
    }

    #[test]
    fn test_spawn_on_blocked_board_is_game_over() {
        let board = Board::from_ascii(&["##########"; 20]);
        let mut state = GameState::with_board(1, board);
        assert!(!state.spawn(PieceKind::T));
        assert!(state.game_over);
        assert_eq!(sounds(&mut state), vec![SoundEffect::GameOver]);
    }

    #[test]
    fn test_merge_and_clear_are_noops_after_game_over() {
        let board = Board::from_ascii(&["##########"; 20]);
        let mut state = GameState::with_board(1, board.clone());
        assert!(!state.spawn(PieceKind::T));
        state.drain_events().for_each(drop);

        state.merge_piece();
        assert_eq!(state.clear_lines(), 0);
        assert_eq!(state.board, board);
        assert!(state.active.is_some());
        assert_eq!(state.lines, 0);
        assert!(state.particles.is_empty());
        assert_eq!(state.drain_events().count(), 0);
    }

    #[test]
    fn test_particles_keep_animating_after_game_over() {
        let mut state = GameState::new(1);
        state.particles.push(Particle::new(0.0, 0.0, 1.0, 0.0, Rgb::default()));
        state.game_over = true;

        state.tick(16);
        assert_eq!(state.particles[0].x, 1.0);
    }

    #[test]
    fn test_apply_action_ignored_after_game_over() {
        let mut state = GameState::new(1);
        state.spawn(PieceKind::T);
        state.game_over = true;
        let before = state.active;

        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
        ] {
            assert!(!state.apply_action(action));
        }
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::with_board(1, Board::from_ascii(&["#........."]));
        state.spawn(PieceKind::L);

        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], 1);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::L);
        assert_eq!(active.color, PieceKind::L.color());
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert!(snap.started);
        assert!(!snap.game_over);
    }
}
