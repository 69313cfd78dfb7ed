use std::{env, path::PathBuf, time::Duration};

use log::LevelFilter;

use crate::grid::Board;

pub const HIGH_SCORE_FILE_VAR: &str = "SNAKE_HIGHSCORE_FILE";
pub const LOG_FILE_VAR: &str = "SNAKE_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "SNAKE_LOG_LEVEL";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub board: Board,
    pub fps: u32,
    pub high_score_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board: Board::default(),
            fps: 20,
            high_score_file: PathBuf::from("highscore.txt"),
            log_file: PathBuf::from("snake.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from defaults, overridden by whatever `lookup` returns.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Config::default();

        if let Some(path) = lookup(HIGH_SCORE_FILE_VAR).filter(|v| !v.is_empty()) {
            config.high_score_file = PathBuf::from(path);
        }
        if let Some(path) = lookup(LOG_FILE_VAR).filter(|v| !v.is_empty()) {
            config.log_file = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR).and_then(|v| v.trim().parse().ok()) {
            config.log_level = level;
        }

        config
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.board, Board::new(40, 30));
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (HIGH_SCORE_FILE_VAR, "/tmp/best.txt"),
            (LOG_FILE_VAR, "/tmp/snake-debug.log"),
            (LOG_LEVEL_VAR, "debug"),
        ]));
        assert_eq!(config.high_score_file, PathBuf::from("/tmp/best.txt"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/snake-debug.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (HIGH_SCORE_FILE_VAR, ""),
            (LOG_LEVEL_VAR, "loud"),
        ]));
        assert_eq!(config, Config::default());
    }
}
