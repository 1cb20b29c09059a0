//! Terminal blockfall runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and one frame
//! every `FRAME_MS`. Configuration comes from `BLOCKFALL_*` environment
//! variables (see `blockfall::config`).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::audio::{SilentPlayer, SoundPlayer};
use blockfall::term::{TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::{App, Config, KeyOutcome};

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_path {
        blockfall::logging::init_log(config.log_level, path)?;
    }
    info!("starting with seed {}", config.seed);

    let player = open_player(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(config.seed, player));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

#[cfg(feature = "audio")]
fn open_player(config: &Config) -> Box<dyn SoundPlayer> {
    use blockfall::audio::{RodioPlayer, SoundBank};

    if config.mute {
        info!("audio muted");
        return Box::new(SilentPlayer);
    }
    match SoundBank::load(&config.sounds_dir).and_then(RodioPlayer::open) {
        Ok(player) => Box::new(player),
        Err(err) => {
            log::warn!("audio disabled: {:#}", err);
            Box::new(SilentPlayer)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_player(config: &Config) -> Box<dyn SoundPlayer> {
    if !config.mute {
        info!("built without the `audio` feature; sounds are silent");
    }
    Box::new(SilentPlayer)
}

fn run(term: &mut TerminalRenderer, mut app: App<Box<dyn SoundPlayer>>) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.present(app.render(Viewport::new(w, h)))?;

        // Input with timeout until next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if app.handle_key(key) == KeyOutcome::Quit {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();
            app.frame(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
