//! History persistence
//!
//! The entire calculation history lives in one JSON file: read once at
//! startup, fully rewritten after each successful computation. Malformed
//! or absent data degrades to an empty history; there is no schema
//! versioning and no error surfaced to the user.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::models::History;

/// File name of the persisted history inside the data directory.
const HISTORY_FILE: &str = "history.json";

/// JSON-backed store for the calculation history.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    base_dir: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted at the given data directory, creating the
    /// directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self, std::io::Error> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Path of the history file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.base_dir.join(HISTORY_FILE)
    }

    /// Load the persisted history.
    ///
    /// A missing file, unreadable file, or unparseable contents all yield
    /// an empty history.
    #[must_use]
    pub fn load(&self) -> History {
        let path = self.file_path();
        if !path.exists() {
            return History::new();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => History::new(),
        }
    }

    /// Persist the full history, replacing whatever was stored before.
    ///
    /// The document is staged to a temp file and renamed into place so a
    /// failed write never truncates the existing store.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, history: &History) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.file_path();
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(history)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Delete the persisted history, if any.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), std::io::Error> {
        let path = self.file_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// The data directory backing this store.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
