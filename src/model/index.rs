use super::PlaylistEntry;
use serde::{Deserialize, Serialize};

/// Compiled archive index: the favorite playlist plus every playlist in
/// directory-name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistIndex {
    /// ID of the favorite playlist, empty when the archive has no playlists
    pub favorite: String,

    /// Playlists sorted by their original directory name
    pub playlists: Vec<PlaylistEntry>,
}

impl PlaylistIndex {
    /// Index of an archive with no playlists
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a playlist by ID
    pub fn get(&self, id: &str) -> Option<&PlaylistEntry> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
