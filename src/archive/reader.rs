//! Archive directory listing
//!
//! Listings are always sorted by name, never left in filesystem order.

use super::codec::has_json_extension;
use super::naming::FAVORITE_MARKER;
use crate::error::{ArchiveError, Result};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Direct children of `dir`, sorted by file name
fn sorted_children(dir: &Path) -> Result<Vec<DirEntry>> {
    if !dir.is_dir() {
        return Err(ArchiveError::not_found(dir));
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| ArchiveError::io(dir, io::Error::from(e))))
        .collect()
}

/// Names of the playlist directories in `archive_dir`, sorted ascending
///
/// A directory whose name is not valid UTF-8 is an error, not skipped.
pub fn list_playlist_dirs(archive_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in sorted_children(archive_dir)? {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_str().ok_or_else(|| {
            ArchiveError::parse(entry.path(), "playlist folder name is not valid UTF-8")
        })?;
        names.push(name.to_string());
    }

    Ok(names)
}

/// Entry files (`*.json`) in `playlist_dir`, sorted by file name
///
/// Other files and subdirectories are skipped. A `.json` file whose name is
/// not a valid entry file name is still listed so that decoding reports it.
pub fn list_entry_files(playlist_dir: &Path) -> Result<Vec<PathBuf>> {
    let files = sorted_children(playlist_dir)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file() && has_json_extension(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    Ok(files)
}

/// Locate a playlist directory by its display name
///
/// The favorite-marked directory `_{name}` takes precedence over `{name}`.
pub fn resolve_playlist_dir(archive_dir: &Path, playlist_name: &str) -> Result<PathBuf> {
    let favorite = archive_dir.join(format!("{FAVORITE_MARKER}{playlist_name}"));
    if favorite.is_dir() {
        return Ok(favorite);
    }

    let plain = archive_dir.join(playlist_name);
    if plain.is_dir() {
        return Ok(plain);
    }

    Err(ArchiveError::UnknownPlaylist {
        name: playlist_name.to_string(),
    })
}
