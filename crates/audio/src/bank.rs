//! Preloaded sound files, one per [`SoundEffect`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};

use crate::types::SoundEffect;

/// Raw encoded sound data keyed by effect.
///
/// Files are read once; playback clones the `Arc`, not the bytes.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    sounds: HashMap<SoundEffect, Arc<[u8]>>,
}

impl SoundBank {
    /// Read every `SoundEffect::file_name()` under `dir`.
    ///
    /// A missing directory is an error. A missing or unreadable file is
    /// logged and left out; that cue will simply be silent.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            bail!("sound directory {} does not exist", dir.display());
        }

        let mut sounds = HashMap::new();
        for effect in SoundEffect::ALL {
            let path = dir.join(effect.file_name());
            match fs::read(&path) {
                Ok(bytes) => {
                    log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
                    sounds.insert(effect, Arc::from(bytes));
                }
                Err(e) => log::warn!("cannot load sound '{}': {}", path.display(), e),
            }
        }

        log::info!(
            "sound bank {}: {}/{} sounds",
            dir.display(),
            sounds.len(),
            SoundEffect::ALL.len()
        );
        Ok(Self { sounds })
    }

    pub fn get(&self, effect: SoundEffect) -> Option<Arc<[u8]>> {
        self.sounds.get(&effect).cloned()
    }

    pub fn contains(&self, effect: SoundEffect) -> bool {
        self.sounds.contains_key(&effect)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_skips_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("move.wav"), b"RIFF-move").unwrap();
        fs::write(tmp.path().join("gameover.wav"), b"RIFF-over").unwrap();

        let bank = SoundBank::load(tmp.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(bank.contains(SoundEffect::Move));
        assert!(bank.contains(SoundEffect::GameOver));
        assert!(!bank.contains(SoundEffect::Clear));
        assert_eq!(&*bank.get(SoundEffect::Move).unwrap(), b"RIFF-move");
    }

    #[test]
    fn load_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SoundBank::load(tmp.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
