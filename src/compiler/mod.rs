//! Archive compilation into the served JSON layout

pub mod config;
pub mod organizer;
pub mod pipeline;

pub use config::CompileConfig;
pub use organizer::OutputOrganizer;
pub use pipeline::{compile, CompileReport, Compiler};
