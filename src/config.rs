//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: RNG seed (default: random)
//! - `BLOCKFALL_SOUNDS_DIR`: directory holding the wav files (default: "sounds")
//! - `BLOCKFALL_MUTE`: "1" or "true" disables audio
//! - `BLOCKFALL_LOG_PATH`: log file; unset or empty disables logging
//! - `BLOCKFALL_LOG_LEVEL`: off/error/warn/info/debug/trace (default: info)

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u32,
    pub sounds_dir: PathBuf,
    pub mute: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random::<u32>);

        let sounds_dir = lookup("BLOCKFALL_SOUNDS_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("sounds"));

        let mute = lookup("BLOCKFALL_MUTE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            seed,
            sounds_dir,
            mute,
            log_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_values_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_SOUNDS_DIR", "/tmp/snd"),
            ("BLOCKFALL_MUTE", "TRUE"),
            ("BLOCKFALL_LOG_PATH", " game.log "),
            ("BLOCKFALL_LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.seed, 42);
        assert_eq!(config.sounds_dir, PathBuf::from("/tmp/snd"));
        assert!(config.mute);
        assert_eq!(config.log_path, Some(PathBuf::from("game.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn missing_or_bad_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("BLOCKFALL_MUTE", "yes please"),
            ("BLOCKFALL_LOG_PATH", "   "),
            ("BLOCKFALL_LOG_LEVEL", "loud"),
        ]));

        assert_eq!(config.sounds_dir, PathBuf::from("sounds"));
        assert!(!config.mute);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
