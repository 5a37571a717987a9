//! Playlist Compiler - file-based video playlist archive tooling
//!
//! This library maintains an archive of playlists (one directory per
//! playlist, one JSON file per video) and compiles it into the flat JSON
//! layout served to the player front-end.

pub mod archive;
pub mod commands;
pub mod compiler;
pub mod error;
pub mod maintenance;
pub mod model;
pub mod serve;
pub mod validation;

pub use compiler::{compile, CompileConfig, CompileReport, Compiler};
pub use error::{ArchiveError, ErrorKind, Result};
pub use maintenance::{create_entry, reallocate, update_entry};
pub use validation::validate_output;
