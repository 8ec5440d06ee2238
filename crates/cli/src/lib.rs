//! risinggen_cli - command line browser for the activity calendar.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

pub use commands::execute;
pub use config::Config;
pub use error::{CliError, Result};
