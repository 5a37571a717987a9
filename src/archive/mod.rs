//! Playlist archive access
//!
//! An archive is a directory holding one subdirectory per playlist; each
//! playlist holds one JSON file per video:
//!
//! ```text
//! archive/
//!   _Favorites/            <- leading `_` marks the favorite playlist
//!     0000010__abc.json
//!     0000020__def.json
//!   Road Trip/
//!     0000010__xyz.json
//! ```

pub mod codec;
pub mod index;
pub mod naming;
pub mod reader;

pub use codec::{
    decode_filename, encode_filename, read_entry, sparse_index, validate_video_id, write_entry,
};
pub use index::build_index;
pub use naming::{derive_display_name, derive_id};
pub use reader::{list_entry_files, list_playlist_dirs, resolve_playlist_dir};
