//! CLI error types.

use std::path::PathBuf;

use risinggen_core::events::{CatalogError, QueryError};
use thiserror::Error;

/// Result type alias for the CLI crate.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading a catalog or running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Event not found: {id}")]
    NotFound { id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
