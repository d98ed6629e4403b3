//! Error types for clean-disk-space

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Could not determine the home directory. Pass --home or set CLEAN_DISK_SPACE_HOME")]
    HomeNotFound,

    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Failed to remove {}: {source}", path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Report error: {0}")]
    ReportError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;
