//! Compile configuration

use std::path::PathBuf;

/// Configuration for a compile run
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Archive root holding one directory per playlist
    pub input_dir: PathBuf,

    /// Directory receiving `index` and one file per playlist
    pub output_dir: PathBuf,

    /// Re-read and check the compiled output once written
    pub validate: bool,
}

impl CompileConfig {
    /// Create a new compile configuration
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            validate: true,
        }
    }

    /// Enable or disable post-compile validation
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
