//! Data model shared by the archive reader, compiler and maintenance passes
//!
//! These structures mirror both the on-disk entry files and the compiled
//! output consumed by the front-end.

mod index;
mod playlist;
mod video;

pub use index::PlaylistIndex;
pub use playlist::PlaylistEntry;
pub use video::{FilenameInfo, VideoEntry};
