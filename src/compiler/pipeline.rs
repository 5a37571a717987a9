//! Archive compile pipeline

use super::config::CompileConfig;
use super::organizer::OutputOrganizer;
use crate::archive::{self, naming};
use crate::error::{ArchiveError, Result};
use crate::model::VideoEntry;
use crate::validation::validate_output;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Summary of a compile run
#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    /// Written index file
    pub index_path: PathBuf,

    /// Number of playlists compiled
    pub playlists: usize,

    /// Number of entries across all playlists
    pub entries: usize,

    /// Output files not produced by this run, left in place
    pub stale_outputs: Vec<PathBuf>,
}

/// Compiles an archive into the flat JSON layout served to the front-end
pub struct Compiler {
    config: CompileConfig,
    organizer: OutputOrganizer,
}

impl Compiler {
    /// Create a compiler; the input and output directories must exist
    pub fn new(config: CompileConfig) -> Result<Self> {
        if !config.input_dir.is_dir() {
            return Err(ArchiveError::not_found(&config.input_dir));
        }
        let organizer = OutputOrganizer::new(config.output_dir.clone())?;

        Ok(Self { config, organizer })
    }

    /// Run the complete compile
    ///
    /// Any failure aborts the run and may leave the output directory partly
    /// written.
    pub fn compile(&self) -> Result<CompileReport> {
        log::info!("Start processing playlists");
        log::info!("Input: {:?}", self.config.input_dir);
        log::info!("Output: {:?}", self.organizer.output_dir());

        let mut report = CompileReport::default();
        let mut written = BTreeSet::new();

        // Step 1: playlist index
        let index = archive::build_index(&self.config.input_dir)?;
        let index_path = self.organizer.index_path();
        self.organizer.write_json(&index_path, &index)?;
        log::info!("Playlist index saved in {:?}", index_path);
        written.insert(index_path.clone());
        report.index_path = index_path;

        // Step 2: one file per playlist
        for dir_name in archive::list_playlist_dirs(&self.config.input_dir)? {
            let playlist_name = naming::derive_display_name(&dir_name);
            let playlist_id = naming::derive_id(&dir_name);
            log::info!("Building playlist {}", playlist_name);

            let videos = compile_playlist(&self.config.input_dir.join(&dir_name))?;
            let playlist_path = self.organizer.playlist_path(&playlist_id);

            if !written.insert(playlist_path.clone()) {
                log::warn!(
                    "Playlist {} overwrites output {:?} written earlier in this run",
                    dir_name,
                    playlist_path
                );
            }

            self.organizer.write_json(&playlist_path, &videos)?;
            log::info!(
                "Playlist {} ({} videos) saved in {:?}",
                playlist_name,
                videos.len(),
                playlist_path
            );

            report.playlists += 1;
            report.entries += videos.len();
        }

        // Removed playlists keep their old output; report it
        report.stale_outputs = self.organizer.stale_outputs(&written)?;
        for stale in &report.stale_outputs {
            log::warn!("Stale output left in place (no matching playlist): {:?}", stale);
        }

        log::info!(
            "Compiled {} playlists, {} videos",
            report.playlists,
            report.entries
        );

        if self.config.validate {
            log::info!("Running post-compile validation...");
            validate_output(self.organizer.output_dir())?;
            log::info!("Validation passed");
        }

        Ok(report)
    }
}

/// Read every entry of a playlist directory, in file name order
pub fn compile_playlist(playlist_dir: &Path) -> Result<Vec<VideoEntry>> {
    let files = archive::list_entry_files(playlist_dir)?;
    let mut videos = Vec::with_capacity(files.len());

    for path in files {
        let video = archive::read_entry(&path)?;
        log::debug!("  {} - {} ({})", video.author, video.title, video.video_id);
        videos.push(video);
    }

    Ok(videos)
}

/// Compile `input_dir` into `output_dir` with default settings
pub fn compile(input_dir: &Path, output_dir: &Path) -> Result<CompileReport> {
    let config = CompileConfig::new(input_dir.to_path_buf(), output_dir.to_path_buf());
    Compiler::new(config)?.compile()
}
