use serde::{Deserialize, Serialize};

/// A single video record stored as `{index}__{video_id}.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Video title
    pub title: String,

    /// Channel or author name
    pub author: String,

    /// Duration, usually `HH:MM:SS`
    pub duration: String,

    /// Provider video identifier, also embedded in the file name
    pub video_id: String,

    /// Sparse index taken from (or assigned into) the file name.
    /// Never serialized.
    #[serde(skip)]
    pub file_index: Option<u64>,
}

impl VideoEntry {
    /// Create an entry that has not been stored yet
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        duration: impl Into<String>,
        video_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            duration: duration.into(),
            video_id: video_id.into(),
            file_index: None,
        }
    }
}

/// Decoded form of an entry file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameInfo {
    pub index: u64,
    pub video_id: String,
}
