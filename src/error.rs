//! Error taxonomy for loading, computing and rendering a latency CDF

use std::num::ParseFloatError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur anywhere in the read → parse → sort → compute → render pipeline
#[derive(Error, Debug)]
pub enum CdfError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: invalid latency value {content:?}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("No latency samples in {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("Failed to render CDF plot: {0}")]
    Render(String),

    #[error("Failed to launch viewer `{command}`: {source}")]
    Viewer {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Viewer `{command}` exited with {status}")]
    ViewerStatus { command: String, status: ExitStatus },
}

/// Result type for CDF operations
pub type Result<T> = std::result::Result<T, CdfError>;
