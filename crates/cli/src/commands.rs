//! Command execution against a loaded catalog.

use risinggen_core::events::{
    distinct_values, filter_by_equality, group_by_month, run_query, select_featured, EventCatalog,
    EventQuery, Facet,
};

use crate::cli::{Commands, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::{json::format_json, pretty};

/// Runs a command and returns the text to print.
///
/// With `quiet`, pretty output drops empty-state messages and the `check`
/// summary, returning an empty string instead. JSON output is never dropped.
pub fn execute(
    command: Commands,
    catalog: &EventCatalog,
    format: OutputFormat,
    quiet: bool,
) -> Result<String> {
    match command {
        Commands::List(args) => {
            let query = EventQuery::from(args);
            tracing::debug!(?query, "Running query");
            let events = run_query(catalog, &query);
            if events.is_empty() {
                tracing::warn!(?query, "Query matched no events");
            }
            match format {
                OutputFormat::Json => format_json(&events),
                OutputFormat::Pretty => Ok(unless_quiet(quiet && events.is_empty(), || {
                    pretty::format_events("Events", &events)
                })),
            }
        }
        Commands::Filter { field, value } => {
            let events = filter_by_equality(catalog, &field, &value)?;
            tracing::debug!(%field, %value, matched = events.len(), "Filtered events");
            match format {
                OutputFormat::Json => format_json(&events),
                OutputFormat::Pretty => Ok(unless_quiet(quiet && events.is_empty(), || {
                    pretty::format_events("Events", &events)
                })),
            }
        }
        Commands::Featured => {
            let events = select_featured(catalog);
            match format {
                OutputFormat::Json => format_json(&events),
                OutputFormat::Pretty if events.is_empty() => {
                    Ok(unless_quiet(quiet, || "No featured events.".to_string()))
                }
                OutputFormat::Pretty => Ok(pretty::format_events("Featured Area Events", &events)),
            }
        }
        Commands::Months => {
            let groups = group_by_month(catalog);
            match format {
                OutputFormat::Json => format_json(&groups),
                OutputFormat::Pretty => Ok(unless_quiet(quiet && groups.is_empty(), || {
                    pretty::format_month_groups(&groups)
                })),
            }
        }
        Commands::Show { id } => {
            let event = catalog.get(&id).ok_or(CliError::NotFound { id })?;
            match format {
                OutputFormat::Json => format_json(event),
                OutputFormat::Pretty => Ok(pretty::format_event_detail(event)),
            }
        }
        Commands::Facets { facet } => {
            let facet = Facet::from(facet);
            let values = distinct_values(catalog, facet);
            match format {
                OutputFormat::Json => format_json(&values),
                OutputFormat::Pretty => Ok(unless_quiet(quiet && values.is_empty(), || {
                    pretty::format_values(facet_title(facet), &values)
                })),
            }
        }
        Commands::Check => match format {
            OutputFormat::Json => format_json(&serde_json::json!({ "events": catalog.len() })),
            OutputFormat::Pretty => Ok(unless_quiet(quiet, || {
                format!("Catalog OK: {} events", catalog.len())
            })),
        },
    }
}

fn unless_quiet(suppress: bool, render: impl FnOnce() -> String) -> String {
    if suppress {
        String::new()
    } else {
        render()
    }
}

fn facet_title(facet: Facet) -> &'static str {
    match facet {
        Facet::Country => "Countries",
        Facet::City => "Cities",
        Facet::Stake => "Stakes",
        Facet::Language => "Languages",
        Facet::EventType => "Categories",
        Facet::CostType => "Cost types",
        Facet::Tag => "Tags",
    }
}
