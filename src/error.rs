//! Error types for the folder-manager application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Invocation errors
    #[error("{0}")]
    Usage(String),

    #[error("Could not determine {0}")]
    EnvironmentResolution(String),

    // Configuration errors
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // File system errors
    #[error("Error creating directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path exists but is not a directory: {}", .0.display())]
    PathConflict(PathBuf),

    #[error("Error changing directory to {}: {source}", .path.display())]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Shell integration errors (never fatal)
    #[error("Could not open in file browser: {0}")]
    ShellOpen(String),

    // Interactive input errors
    #[error("Input closed before an answer was given")]
    InputClosed,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => exit_codes::USAGE_ERROR,
            Error::EnvironmentResolution(_) => exit_codes::ENVIRONMENT_ERROR,
            Error::ConfigRead { .. } | Error::ConfigWrite { .. } => exit_codes::CONFIG_ERROR,
            Error::DirectoryCreate { .. }
            | Error::PathConflict(_)
            | Error::WorkingDirectory { .. } => exit_codes::FILESYSTEM_ERROR,
            Error::InputClosed => exit_codes::INPUT_ERROR,
            Error::ShellOpen(_) | Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE_ERROR: i32 = 1;
    pub const ENVIRONMENT_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const INPUT_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
