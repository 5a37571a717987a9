//! Dense renumbering of entry files

use crate::archive::{self, codec};
use crate::error::{ArchiveError, Result};
use crate::model::FilenameInfo;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a reallocation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReallocationReport {
    pub playlists: usize,
    pub entries: usize,
    pub renamed: usize,
}

/// Renumber every playlist in the archive to 10, 20, 30, ...
pub fn reallocate(archive_dir: &Path) -> Result<ReallocationReport> {
    let mut report = ReallocationReport::default();

    for dir_name in archive::list_playlist_dirs(archive_dir)? {
        log::info!("Reallocating '{}'", archive::derive_display_name(&dir_name));

        let (entries, renamed) = reallocate_playlist(&archive_dir.join(&dir_name))?;
        report.playlists += 1;
        report.entries += entries;
        report.renamed += renamed;
    }

    log::info!(
        "Reallocated {} playlists: {} of {} entries renamed",
        report.playlists,
        report.renamed,
        report.entries
    );
    Ok(report)
}

/// Renumber one playlist directory, keeping the current entry order
///
/// Returns the number of entries and how many were renamed. Nothing is
/// renamed if a file name does not decode or a video ID appears twice.
pub fn reallocate_playlist(playlist_dir: &Path) -> Result<(usize, usize)> {
    let mut entries: Vec<(FilenameInfo, PathBuf)> = Vec::new();
    let mut seen = HashSet::new();

    for path in archive::list_entry_files(playlist_dir)? {
        let info = codec::decode_path(&path)?;
        if !seen.insert(info.video_id.clone()) {
            return Err(ArchiveError::parse(
                &path,
                format!("video ID '{}' appears more than once", info.video_id),
            ));
        }
        entries.push((info, path));
    }

    // Numeric index order; names break ties
    entries.sort_by(|(a, a_path), (b, b_path)| a.index.cmp(&b.index).then(a_path.cmp(b_path)));

    let mut renamed = 0;
    for (position, (info, path)) in entries.iter().enumerate() {
        let target = playlist_dir.join(codec::encode_filename(
            codec::sparse_index(position),
            &info.video_id,
        ));
        if target == *path {
            continue;
        }

        log::debug!("  {:?} -> {:?}", path.file_name(), target.file_name());
        fs::rename(path, &target).map_err(|e| ArchiveError::io(path, e))?;
        renamed += 1;
    }

    Ok((entries.len(), renamed))
}
