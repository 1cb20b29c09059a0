//! rodio-backed [`SoundPlayer`].

use std::io::Cursor;

use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::bank::SoundBank;
use crate::types::SoundEffect;
use crate::SoundPlayer;

/// Plays cues from a [`SoundBank`] on the default output device.
///
/// Every cue gets a fresh decoder and a detached sink, so it always starts
/// from the beginning and overlapping cues mix.
pub struct RodioPlayer {
    // Dropping the stream stops all output.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
}

impl RodioPlayer {
    /// Open the default output device.
    pub fn open(bank: SoundBank) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        log::info!("audio output opened ({} sounds)", bank.len());
        Ok(Self {
            _stream: stream,
            handle,
            bank,
        })
    }

    fn try_play(&self, effect: SoundEffect) -> Result<()> {
        let Some(bytes) = self.bank.get(effect) else {
            log::debug!("sound {} not loaded", effect.as_str());
            return Ok(());
        };
        let source = Decoder::new(Cursor::new(bytes))?;
        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&mut self, effect: SoundEffect) {
        if let Err(e) = self.try_play(effect) {
            log::warn!("audio play failed ({}): {}", effect.as_str(), e);
        }
    }
}
