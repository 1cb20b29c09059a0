//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, audio or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Runs headless; side effects come out as events
//! - **Portable**: Any frontend can drain events and draw snapshots
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with collision, merge and line clearing
//! - [`game_state`]: Active piece, score, drop timer, game over, events
//! - [`particle`]: Cosmetic line-clear particles
//! - [`piece`]: Tetromino shape matrices and rotation
//! - [`rng`]: Seedable LCG for piece choice and particle spread
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random and spawn at (4, 0)
//! - Gravity moves the piece down once the frame time accumulated since the
//!   last step exceeds 1000ms; a blocked step merges the piece
//! - Each full row scores 100 points
//! - A piece that collides right after spawning ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameEvent, GameState};
//! use blockfall_types::{GameAction, PieceKind, SoundEffect};
//!
//! let mut game = GameState::new(12345);
//! game.spawn(PieceKind::T);
//!
//! assert!(game.apply_action(GameAction::MoveRight));
//! assert_eq!(
//!     game.drain_events().collect::<Vec<_>>(),
//!     vec![GameEvent::Sound(SoundEffect::Move)]
//! );
//!
//! // One frame past the drop interval pulls the piece down a row.
//! game.tick(1001);
//! assert_eq!(game.active().unwrap().y, 1);
//! ```

pub mod board;
pub mod game_state;
pub mod particle;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameEvent, GameState};
pub use particle::Particle;
pub use piece::{base_shape, Piece, Shape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
