// crates/write_extracted_file/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `content` to `path` verbatim, creating any missing parent
/// directories first. An existing file at `path` is overwritten
/// unconditionally; no newline normalization or encoding conversion is
/// applied.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file
/// cannot be written; the message carries the offending path.
pub fn write_extracted_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Error creating directory {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("Error writing file {}", path.display()))
}
