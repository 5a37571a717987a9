use serde::{Deserialize, Serialize};

/// Summary of one playlist directory, as listed in the compiled index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Directory name without the favorite marker
    pub name: String,

    /// Identifier used as the compiled playlist file name
    pub id: String,
}

impl PlaylistEntry {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
