//! Output formatting functions.
//!
//! Commands pick a renderer per [`crate::cli::OutputFormat`]: [`json`] for
//! machine-readable output, [`pretty`] for terminals.

pub mod json;
pub mod pretty;
