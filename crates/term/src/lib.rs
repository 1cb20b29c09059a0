//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a framebuffer that is then flushed to the terminal, standing in for
//! the 2D drawing surface of the game.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: crossterm output with per-cell diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
