//! Error types for archive operations

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the archive compiler and maintenance operations
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A required archive, playlist, entry or output path does not exist
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A file name or file body is not in the expected format
    #[error("cannot parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// Neither `_{name}` nor `{name}` exists in the archive
    #[error("unknown playlist, got '{name}'")]
    UnknownPlaylist { name: String },

    /// No entry file in the playlist carries the requested video ID
    #[error("unknown video ID '{video_id}' in playlist '{playlist}'")]
    UnknownVideo { playlist: String, video_id: String },

    /// Another entry file in the playlist already carries the video ID
    #[error("video ID '{video_id}' already exists in playlist '{playlist}'")]
    DuplicateVideo { playlist: String, video_id: String },

    /// Any other filesystem failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of [`ArchiveError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    UnknownPlaylist,
    UnknownVideo,
    DuplicateVideo,
    Io,
}

impl ArchiveError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error, turning `NotFound` into [`ArchiveError::NotFound`]
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::UnknownPlaylist { .. } => ErrorKind::UnknownPlaylist,
            Self::UnknownVideo { .. } => ErrorKind::UnknownVideo,
            Self::DuplicateVideo { .. } => ErrorKind::DuplicateVideo,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Result alias used by the library
pub type Result<T> = std::result::Result<T, ArchiveError>;
