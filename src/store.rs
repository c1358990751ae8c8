//! File-backed key-value store
//!
//! Holds named text entries in a single TOML file. Each entry is an opaque
//! string (the tools keep compact JSON in them). Every write replaces the
//! whole file; there are no partial or delta writes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Entry holding the timetable blob
pub const SCHEDULE_KEY: &str = "scheduleData";
/// Entry holding the diary blob
pub const DIARY_KEY: &str = "diaryData";
/// Entry holding the display theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

pub struct LocalStore {
    file_path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at `file_path`.
    ///
    /// A missing or empty file gives an empty store. A file that exists but is
    /// not a valid store is an error, so the user's data is never overwritten.
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        let entries = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read store {}", file_path.display()))?;
            let file: StoreFile = toml::from_str(&content)
                .with_context(|| format!("Store {} is not valid TOML", file_path.display()))?;
            file.entries
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %file_path.display(), entries = entries.len(), "store opened");
        Ok(Self { file_path, entries })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set `key` to `value`. The entry changes only once the file is written.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.into());
        self.commit(entries)
    }

    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }

    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<()> {
        let file = StoreFile { entries };
        let content = toml::to_string_pretty(&file)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write store {}", self.file_path.display()))?;
        tracing::debug!(path = %self.file_path.display(), "store written");
        self.entries = file.entries;
        Ok(())
    }
}
