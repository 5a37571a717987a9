//! Creating and updating single entries in a playlist directory

use crate::archive::{self, codec};
use crate::error::{ArchiveError, Result};
use crate::model::VideoEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// Append a new entry to a playlist, assigning the next sparse index
///
/// The video ID must be storable in a file name and not already present in
/// the playlist. Returns the path of the created entry file.
pub fn create_entry(
    archive_dir: &Path,
    playlist_name: &str,
    title: &str,
    author: &str,
    duration: &str,
    video_id: &str,
) -> Result<PathBuf> {
    codec::validate_video_id(video_id)?;
    let playlist_dir = archive::resolve_playlist_dir(archive_dir, playlist_name)?;
    if find_entry_file(&playlist_dir, video_id)?.is_some() {
        return Err(duplicate(playlist_name, video_id));
    }

    let mut video = VideoEntry::new(title, author, duration, video_id);
    let path = codec::write_entry(&mut video, &playlist_dir)?;

    log::info!("Created new video entry: {} - {}", title, author);
    log::debug!("Entry stored at {:?}", path);
    Ok(path)
}

fn duplicate(playlist_name: &str, video_id: &str) -> ArchiveError {
    ArchiveError::DuplicateVideo {
        playlist: playlist_name.to_string(),
        video_id: video_id.to_string(),
    }
}

/// Find the entry file whose decoded video ID is `video_id`
fn find_entry_file(playlist_dir: &Path, video_id: &str) -> Result<Option<PathBuf>> {
    for path in archive::list_entry_files(playlist_dir)? {
        if codec::decode_path(&path)?.video_id == video_id {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Change the video ID (and optionally the duration) of an entry
///
/// The entry keeps its index: it is rewritten under the file name for the new
/// ID, then the old file is removed. Returns the path of the updated entry.
/// Nothing is written if the new ID is malformed or already used by another
/// entry of the playlist.
pub fn update_entry(
    archive_dir: &Path,
    playlist_name: &str,
    old_video_id: &str,
    new_video_id: &str,
    duration: Option<&str>,
) -> Result<PathBuf> {
    codec::validate_video_id(new_video_id)?;
    let playlist_dir = archive::resolve_playlist_dir(archive_dir, playlist_name)?;

    let old_path = find_entry_file(&playlist_dir, old_video_id)?.ok_or_else(|| {
        ArchiveError::UnknownVideo {
            playlist: playlist_name.to_string(),
            video_id: old_video_id.to_string(),
        }
    })?;
    if new_video_id != old_video_id && find_entry_file(&playlist_dir, new_video_id)?.is_some() {
        return Err(duplicate(playlist_name, new_video_id));
    }

    let mut video = codec::read_entry(&old_path)?;
    video.video_id = new_video_id.to_string();
    if let Some(duration) = duration {
        video.duration = duration.to_string();
    }

    let new_path = codec::write_entry(&mut video, &playlist_dir)?;
    if new_path != old_path {
        fs::remove_file(&old_path).map_err(|e| ArchiveError::io(&old_path, e))?;
    }

    log::info!(
        "Updated video entry {} -> {} in {}",
        old_video_id,
        new_video_id,
        playlist_name
    );
    Ok(new_path)
}
