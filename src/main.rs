use anyhow::Result;
use clap::{Parser, Subcommand};
use playlist_compiler::commands::{
    self, parse_duration, Command, CompileRequest, CreateRequest, ReallocateRequest,
    ServeRequest, UpdateRequest, ValidationMode,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-compiler")]
#[command(about = "Maintain and compile a video playlist archive", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile playlists
    Compile {
        /// Input (archive) directory
        #[arg(short = 'i', long, default_value = ".")]
        input: String,

        /// Output directory
        output: String,

        /// Skip validation of the compiled output
        #[arg(long, conflicts_with = "validate_only")]
        no_validate: bool,

        /// Only validate existing output (don't compile)
        #[arg(long)]
        validate_only: bool,
    },

    /// Reallocate the archive
    Reallocate {
        /// Archive directory
        archive_dir: String,
    },

    /// Create new video entry
    Create {
        /// Archive directory
        archive_dir: String,

        /// Playlist name
        playlist: String,

        /// Video title
        title: String,

        /// Author name
        author: String,

        /// Video duration (HH:MM:SS)
        #[arg(value_parser = parse_duration)]
        duration: String,

        /// Video ID
        video_id: String,
    },

    /// Update video entry
    Update {
        /// Archive directory
        archive_dir: String,

        /// Playlist name
        playlist: String,

        /// Old video ID
        old_video_id: String,

        /// New video ID
        new_video_id: String,

        /// Video duration (HH:MM:SS)
        #[arg(short = 'd', long, value_parser = parse_duration)]
        duration: Option<String>,
    },

    /// Serve compiled playlists and the front-end
    Serve {
        /// Directory to serve
        #[arg(short = 'd', long, default_value = ".")]
        directory: String,

        /// Bind address
        #[arg(short = 'b', long, default_value = "localhost")]
        bind: String,

        /// Port
        #[arg(short = 'p', long, default_value = "8000")]
        port: u16,
    },
}

/// Expand ~ in a command-line path
fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Compile {
                input,
                output,
                no_validate,
                validate_only,
            } => Command::Compile(CompileRequest {
                input: expand_path(&input),
                output: expand_path(&output),
                validation: if validate_only {
                    ValidationMode::Only
                } else if no_validate {
                    ValidationMode::Skip
                } else {
                    ValidationMode::AfterCompile
                },
            }),
            Commands::Reallocate { archive_dir } => Command::Reallocate(ReallocateRequest {
                archive_dir: expand_path(&archive_dir),
            }),
            Commands::Create {
                archive_dir,
                playlist,
                title,
                author,
                duration,
                video_id,
            } => Command::Create(CreateRequest {
                archive_dir: expand_path(&archive_dir),
                playlist,
                title,
                author,
                duration,
                video_id,
            }),
            Commands::Update {
                archive_dir,
                playlist,
                old_video_id,
                new_video_id,
                duration,
            } => Command::Update(UpdateRequest {
                archive_dir: expand_path(&archive_dir),
                playlist,
                old_video_id,
                new_video_id,
                duration,
            }),
            Commands::Serve {
                directory,
                bind,
                port,
            } => Command::Serve(ServeRequest {
                root: expand_path(&directory),
                bind,
                port,
            }),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let command = Command::from(args.command);
    commands::run(&command)
}
