//! Error types for spec file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading a spec file.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Spec file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read spec file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse spec file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SpecError {
    /// Path of the spec file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            SpecError::NotFound(path) => path,
            SpecError::Io { path, .. } | SpecError::Parse { path, .. } => path,
        }
    }
}
