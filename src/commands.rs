//! Typed command requests and their dispatch
//!
//! The binary parses its arguments into one [`Command`] and hands it to
//! [`run`]. Each variant carries everything the operation needs.

use crate::compiler::{CompileConfig, Compiler};
use crate::maintenance;
use crate::serve::{self, ServeConfig};
use crate::validation::validate_output;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use std::path::PathBuf;

/// Format of durations accepted on the command line and stored in entries
pub const DURATION_FORMAT: &str = "%H:%M:%S";

/// Whether compiled output is checked after a compile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Compile, then validate
    AfterCompile,
    /// Compile only
    Skip,
    /// Validate existing output without compiling
    Only,
}

#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub validation: ValidationMode,
}

#[derive(Debug, Clone)]
pub struct ReallocateRequest {
    pub archive_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub archive_dir: PathBuf,
    pub playlist: String,
    pub title: String,
    pub author: String,
    pub duration: String,
    pub video_id: String,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub archive_dir: PathBuf,
    pub playlist: String,
    pub old_video_id: String,
    pub new_video_id: String,
    pub duration: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServeRequest {
    pub root: PathBuf,
    pub bind: String,
    pub port: u16,
}

/// One operation requested from the command line
#[derive(Debug, Clone)]
pub enum Command {
    Compile(CompileRequest),
    Reallocate(ReallocateRequest),
    Create(CreateRequest),
    Update(UpdateRequest),
    Serve(ServeRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Compile(_) => "compile",
            Command::Reallocate(_) => "reallocate",
            Command::Create(_) => "create",
            Command::Update(_) => "update",
            Command::Serve(_) => "serve",
        }
    }
}

/// Parse an `HH:MM:SS` duration, normalizing it to two-digit fields
pub fn parse_duration(value: &str) -> Result<String, String> {
    NaiveTime::parse_from_str(value.trim(), DURATION_FORMAT)
        .map(|time| time.format(DURATION_FORMAT).to_string())
        .map_err(|e| format!("expected HH:MM:SS, got '{value}': {e}"))
}

/// Execute a command
pub fn run(command: &Command) -> Result<()> {
    log::debug!("Running command {}", command.name());

    match command {
        Command::Compile(req) => compile(req),
        Command::Reallocate(req) => {
            maintenance::reallocate(&req.archive_dir)
                .with_context(|| format!("Failed to reallocate {:?}", req.archive_dir))?;
            Ok(())
        }
        Command::Create(req) => {
            maintenance::create_entry(
                &req.archive_dir,
                &req.playlist,
                &req.title,
                &req.author,
                &req.duration,
                &req.video_id,
            )
            .with_context(|| format!("Failed to create entry {}", req.video_id))?;
            Ok(())
        }
        Command::Update(req) => {
            maintenance::update_entry(
                &req.archive_dir,
                &req.playlist,
                &req.old_video_id,
                &req.new_video_id,
                req.duration.as_deref(),
            )
            .with_context(|| format!("Failed to update entry {}", req.old_video_id))?;
            Ok(())
        }
        Command::Serve(req) => {
            let config = ServeConfig::new(req.root.clone())
                .with_bind(req.bind.clone())
                .with_port(req.port);
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime.block_on(serve::serve(config))
        }
    }
}

fn compile(req: &CompileRequest) -> Result<()> {
    if req.validation == ValidationMode::Only {
        log::info!("Validation mode - checking existing output...");
        let summary = validate_output(&req.output)
            .with_context(|| format!("Validation of {:?} failed", req.output))?;
        log::info!(
            "Validation completed: {} playlists, {} videos",
            summary.playlists,
            summary.entries
        );
        return Ok(());
    }

    let config = CompileConfig::new(req.input.clone(), req.output.clone())
        .with_validation(req.validation == ValidationMode::AfterCompile);
    let report = Compiler::new(config)
        .and_then(|compiler| compiler.compile())
        .with_context(|| format!("Failed to compile {:?}", req.input))?;

    log::info!("Done! Index written to {:?}", report.index_path);
    Ok(())
}
