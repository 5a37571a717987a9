//! Playlist index construction

use super::naming::{derive_display_name, derive_id, is_favorite};
use super::reader::list_playlist_dirs;
use crate::error::Result;
use crate::model::{PlaylistEntry, PlaylistIndex};
use std::path::Path;

/// Pick the favorite playlist ID from sorted directory names
///
/// The first marked directory wins; without any marker the first directory
/// in sort order is used. Empty input yields an empty ID.
pub fn select_favorite(sorted_names: &[String]) -> String {
    if let Some(marked) = sorted_names.iter().find(|name| is_favorite(name)) {
        log::info!("Found a favorite playlist: {}", marked);
        return derive_id(marked);
    }

    match sorted_names.first() {
        Some(first) => {
            log::info!(
                "No favorite playlist marked, using the first in alphabetical order: {}",
                first
            );
            derive_id(first)
        }
        None => String::new(),
    }
}

/// Build the index from already sorted directory names
pub fn index_from_names(sorted_names: &[String]) -> PlaylistIndex {
    PlaylistIndex {
        favorite: select_favorite(sorted_names),
        playlists: sorted_names
            .iter()
            .map(|name| PlaylistEntry::new(derive_display_name(name), derive_id(name)))
            .collect(),
    }
}

/// Scan `archive_dir` and build its playlist index
pub fn build_index(archive_dir: &Path) -> Result<PlaylistIndex> {
    log::info!("Building playlist index...");
    let names = list_playlist_dirs(archive_dir)?;
    log::info!("Found {} playlist folders", names.len());

    let index = index_from_names(&names);
    log::info!("Playlist index built");
    Ok(index)
}
