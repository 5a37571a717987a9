//! Round-trip validation of compiled output

use crate::compiler::organizer::INDEX_FILE;
use crate::error::{ArchiveError, Result};
use crate::model::{PlaylistIndex, VideoEntry};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// What a successful validation found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub playlists: usize,
    pub entries: usize,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).map_err(|e| ArchiveError::io(path, e))?;
    serde_json::from_slice(&raw).map_err(|e| ArchiveError::parse(path, e.to_string()))
}

/// Validate a compiled output directory
///
/// Checks that `index` parses, that its favorite is one of its playlists, and
/// that every listed playlist file exists and parses as a list of entries.
pub fn validate_output(output_dir: &Path) -> Result<ValidationSummary> {
    log::info!("Validating compiled output at: {:?}", output_dir);

    let index_path = output_dir.join(INDEX_FILE);
    let index: PlaylistIndex = read_json(&index_path)?;
    log::debug!(
        "Index lists {} playlists, favorite '{}'",
        index.playlist_count(),
        index.favorite
    );

    if index.is_empty() {
        if !index.favorite.is_empty() {
            return Err(ArchiveError::parse(
                &index_path,
                format!("favorite '{}' set but no playlists listed", index.favorite),
            ));
        }
    } else if index.get(&index.favorite).is_none() {
        return Err(ArchiveError::parse(
            &index_path,
            format!("favorite '{}' is not a listed playlist", index.favorite),
        ));
    }

    let mut summary = ValidationSummary::default();
    for playlist in &index.playlists {
        let path = output_dir.join(&playlist.id);
        let videos: Vec<VideoEntry> = read_json(&path)?;
        log::debug!("  Playlist {}: {} videos", playlist.id, videos.len());

        summary.playlists += 1;
        summary.entries += videos.len();
    }

    Ok(summary)
}
