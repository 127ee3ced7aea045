//! File reading utilities

use anyhow::{Context, Result};
use quotepara_core::{Entry, LineBuilder};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and build its entry, one raw line per physical line
    pub fn read_entry(path: &Path, builder: &LineBuilder) -> Result<Entry> {
        let content = Self::read_text(path)?;
        let entry = builder.build_text(&content);
        log::debug!("Read {} lines from {}", entry.len(), path.display());
        Ok(entry)
    }
}
