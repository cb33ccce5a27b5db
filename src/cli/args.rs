//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::fs::CreateMode;

/// Project folder manager CLI.
#[derive(Parser, Debug)]
#[command(
    name = "folder-manager",
    version,
    about = "Create or reuse a project folder and open it with your Downloads folder",
    long_about = "Creates (or reuses) a project folder under your configured base directory,\n\
                  switches into it, then opens it and your Downloads folder in the file browser.\n\n\
                  The base directory is asked for on first run and remembered afterwards."
)]
pub struct Args {
    /// Name of the project folder. It is sanitized and confirmed before use.
    #[arg(allow_hyphen_values = true)]
    pub name: String,

    /// Path to the config file holding the base directory.
    #[arg(short, long, env = "FOLDER_MANAGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Create only the project folder itself, not missing parent directories.
    #[arg(long)]
    pub single_level: bool,

    /// Don't open the project and Downloads folders afterwards.
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Directory creation mode selected by the flags.
    pub fn create_mode(&self) -> CreateMode {
        if self.single_level {
            CreateMode::SingleLevel
        } else {
            CreateMode::Recursive
        }
    }
}
