//! risinggen CLI entry point.

use anyhow::Result;
use clap::Parser;
use risinggen_cli::cli::Cli;
use risinggen_cli::loader::load_catalog;
use risinggen_cli::{execute, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_catalog_path(cli.catalog.clone());

    // Logs go to stderr so JSON output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = load_catalog(&config)?;
    tracing::debug!(events = catalog.len(), "Catalog ready");

    let output = execute(cli.command, &catalog, cli.format, cli.quiet)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
