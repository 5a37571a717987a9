//! Static HTTP serving of compiled output
//!
//! Compiled files carry no extension, so everything under `/playlists` is
//! served as JSON regardless of name.

pub mod mime;
pub mod routes;
pub mod server;

pub use routes::{resolve, Resolution};
pub use server::{create_router, serve, ServeConfig};
