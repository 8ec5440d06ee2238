//! Catalog loading: the only I/O in the workspace.

use std::fs;
use std::path::Path;

use risinggen_core::events::EventCatalog;

use crate::config::Config;
use crate::error::{CliError, Result};

/// Loads the configured catalog file, or the built-in sample catalog.
pub fn load_catalog(config: &Config) -> Result<EventCatalog> {
    match &config.catalog_path {
        Some(path) => load_catalog_file(path),
        None => {
            tracing::debug!("No catalog path configured, using sample catalog");
            Ok(EventCatalog::sample())
        }
    }
}

/// Reads and validates a JSON catalog file.
pub fn load_catalog_file(path: &Path) -> Result<EventCatalog> {
    tracing::debug!(path = %path.display(), "Loading catalog");

    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = EventCatalog::from_json(&json).inspect_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "Invalid catalog");
    })?;

    tracing::info!(path = %path.display(), events = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
