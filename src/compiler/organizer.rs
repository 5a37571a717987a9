//! Compiled output layout

use crate::error::{ArchiveError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the compiled playlist index
pub const INDEX_FILE: &str = "index";

/// Manages the compiled output directory
pub struct OutputOrganizer {
    output_dir: PathBuf,
}

impl OutputOrganizer {
    /// Create an organizer for an existing output directory
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        if !output_dir.is_dir() {
            return Err(ArchiveError::not_found(output_dir));
        }
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the compiled index
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    /// Path of a compiled playlist (named by ID, no extension)
    pub fn playlist_path(&self, playlist_id: &str) -> PathBuf {
        self.output_dir.join(playlist_id)
    }

    /// Serialize `value` as compact JSON to `path`
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let file = fs::File::create(path).map_err(|e| ArchiveError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value).map_err(|e| ArchiveError::io(path, e.into()))?;
        writer.flush().map_err(|e| ArchiveError::io(path, e))?;
        Ok(())
    }

    /// Files in the output directory that look like compiled output (no
    /// extension) but are not in `written`
    ///
    /// These are left over from playlists removed from the archive. They are
    /// reported, never deleted.
    pub fn stale_outputs(&self, written: &BTreeSet<PathBuf>) -> Result<Vec<PathBuf>> {
        let mut stale = Vec::new();
        let entries =
            fs::read_dir(&self.output_dir).map_err(|e| ArchiveError::io(&self.output_dir, e))?;

        for entry in entries {
            let path = entry.map_err(|e| ArchiveError::io(&self.output_dir, e))?.path();
            if path.is_file() && path.extension().is_none() && !written.contains(&path) {
                stale.push(path);
            }
        }

        stale.sort();
        Ok(stale)
    }
}
