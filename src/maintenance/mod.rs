//! In-place maintenance of a playlist archive

pub mod entries;
pub mod reallocate;

pub use entries::{create_entry, update_entry};
pub use reallocate::{reallocate, reallocate_playlist, ReallocationReport};
