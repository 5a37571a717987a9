//! Playlist naming rules
//!
//! A playlist directory name may start with `_` to mark the favorite
//! playlist. The marker is not part of the playlist's name.

/// Prefix marking the favorite playlist directory
pub const FAVORITE_MARKER: char = '_';

/// Whether a directory name carries the favorite marker
pub fn is_favorite(raw_name: &str) -> bool {
    raw_name.starts_with(FAVORITE_MARKER)
}

/// Directory name without the favorite marker
pub fn derive_display_name(raw_name: &str) -> &str {
    raw_name.strip_prefix(FAVORITE_MARKER).unwrap_or(raw_name)
}

/// Playlist ID: marker stripped, lowercased, spaces replaced by hyphens
pub fn derive_id(raw_name: &str) -> String {
    derive_display_name(raw_name).to_lowercase().replace(' ', "-")
}
