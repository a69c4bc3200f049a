//! Error types for the extraction pipeline.

use std::path::PathBuf;

use adte_spec::SpecError;
use adte_templates::TemplateError;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while extracting documentation.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Cannot derive a role name from spec file path {}; use --name", .0.display())]
    NoName(PathBuf),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Cannot write output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
