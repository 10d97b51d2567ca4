use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::LedgerState;

/// Persists the full tracker state as a single JSON file.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state. `Ok(None)` means no file exists yet (first
    /// run); an error means the file is present but unreadable or corrupt,
    /// and the caller decides how to fall back.
    pub fn load(&self) -> Result<Option<LedgerState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let state = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(Some(state))
    }

    /// Write the state out. The write goes to a temp file first and is
    /// renamed into place, so a failure mid-write leaves the old file
    /// intact.
    pub fn save(&self, state: &LedgerState) -> Result<()> {
        let temp_path = self.path.with_extension("tmp");

        let file = File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, state).context("Failed to serialize data")?;
        writer.flush().context("Failed to flush data")?;

        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}
