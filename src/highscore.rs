use std::{fs, io, path::{Path, PathBuf}};

use log::{debug, warn};

/// Somewhere to keep the best score between runs.
pub trait HighScoreStore {
    /// The stored score, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    /// Replaces the stored score.
    fn save(&mut self, value: u32) -> io::Result<()>;
}

/// A one-line text file holding the score in decimal.
#[derive(Clone, Debug)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileHighScore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> u32 {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No high score read from {}: {}", self.path.display(), e);
                return 0;
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            warn!("Ignoring malformed high score file {}", self.path.display());
            return 0;
        }

        trimmed.parse().unwrap_or_else(|e| {
            warn!("High score in {} out of range: {}", self.path.display(), e);
            0
        })
    }

    fn save(&mut self, value: u32) -> io::Result<()> {
        fs::write(&self.path, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "snake_highscore_test_{}_{}_{}.txt",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn missing_file_loads_zero() {
        let store = FileHighScore::new(temp_file_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = temp_file_path("roundtrip");
        let mut store = FileHighScore::new(&path);
        store.save(12).expect("save high score");
        assert_eq!(fs::read_to_string(&path).unwrap(), "12");

        store.save(5).expect("overwrite high score");
        assert_eq!(FileHighScore::new(&path).load(), 5);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let path = temp_file_path("whitespace");
        fs::write(&path, "  42\n").unwrap();
        assert_eq!(FileHighScore::new(&path).load(), 42);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn garbage_loads_zero() {
        for body in ["", "abc", "-3", "1.5", "7 8", "99999999999999999999"].iter() {
            let path = temp_file_path("garbage");
            fs::write(&path, body).unwrap();
            assert_eq!(FileHighScore::new(&path).load(), 0, "content {:?}", body);
            let _ = fs::remove_file(&path);
        }
    }

    #[test]
    fn unreadable_path_loads_zero() {
        // A directory cannot be read as a file.
        let store = FileHighScore::new(std::env::temp_dir());
        assert_eq!(store.load(), 0);
    }
}
