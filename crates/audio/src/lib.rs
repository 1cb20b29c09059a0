//! Sound playback for game events.
//!
//! The core only names a [`SoundEffect`]; a [`SoundPlayer`] turns that into
//! noise. Playback is fire-and-forget: failures are logged and dropped,
//! never surfaced to the game.
//!
//! - [`SilentPlayer`]: no output, used when muted or when no device exists
//! - [`RecordingPlayer`]: remembers what was asked for (tests, headless runs)
//! - `RodioPlayer` (feature `rodio`): real output through rodio, from a
//!   [`SoundBank`] preloaded at startup

pub mod bank;
#[cfg(feature = "rodio")]
pub mod rodio_player;

pub use blockfall_types as types;

pub use bank::SoundBank;
#[cfg(feature = "rodio")]
pub use rodio_player::RodioPlayer;

use crate::types::SoundEffect;

/// Something that can play a sound cue.
pub trait SoundPlayer {
    /// Start `effect` from the beginning. Must not fail or block.
    fn play(&mut self, effect: SoundEffect);
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Box<P> {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect)
    }
}

/// Player that discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sound {} (silent)", effect.as_str());
    }
}

/// Player that records every cue in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingPlayer {
    played: Vec<SoundEffect>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[SoundEffect] {
        &self.played
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}
