//! Export and import files
//!
//! Export writes the JSON document to a path (a directory gets the tool's
//! default file name). Import reads a file as text; parsing is left to the
//! tool so that a bad file never reaches the store.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where an export to `path` lands; `None` means the default name in the
/// working directory
pub fn resolve_export_path(path: Option<&Path>, default_name: &str) -> PathBuf {
    match path {
        Some(path) if path.is_dir() => path.join(default_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_name),
    }
}

pub async fn write_export(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write export file {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "exported");
    Ok(())
}

pub async fn read_import(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "import file read");
    Ok(text)
}
