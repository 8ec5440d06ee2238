//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use risinggen_core::events::{EventQuery, Facet, SortDirection};

/// Browse the RisingGen activity calendar.
#[derive(Debug, Parser)]
#[command(name = "risinggen")]
#[command(version, about = "Browse the RisingGen activity calendar", long_about = None)]
pub struct Cli {
    /// JSON catalog file (defaults to the built-in sample catalog).
    #[arg(long, env = "RISINGGEN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output: empty-state messages and the `check` summary.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List events matching a search and filters.
    List(ListArgs),
    /// Filter by a single field: country, category or costType.
    Filter {
        /// Field selector.
        field: String,
        /// Value to compare against ("all" disables the filter).
        value: String,
    },
    /// Show featured events.
    Featured,
    /// List events grouped by month.
    Months,
    /// Show a single event.
    Show {
        /// Event identifier.
        id: String,
    },
    /// List the distinct values of an event attribute.
    Facets {
        facet: FacetArg,
    },
    /// Validate the catalog and report its size.
    Check,
}

/// Arguments for `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text search over title, description, locality and tags.
    #[arg(long, short)]
    pub search: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    /// Event type, e.g. "Service Project".
    #[arg(long)]
    pub category: Option<String>,
    /// Free, Donation or Paid.
    #[arg(long)]
    pub cost: Option<String>,
    /// Only featured events.
    #[arg(long)]
    pub featured: bool,
    /// Sort by start date.
    #[arg(long)]
    pub sort: Option<SortArg>,
}

impl From<ListArgs> for EventQuery {
    fn from(args: ListArgs) -> Self {
        EventQuery {
            search: args.search,
            country: args.country,
            category: args.category,
            cost_type: args.cost,
            featured_only: args.featured,
            sort: args.sort.map(Into::into),
        }
    }
}

/// Sort direction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortDirection {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortDirection::Ascending,
            SortArg::Desc => SortDirection::Descending,
        }
    }
}

/// Facet argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FacetArg {
    Country,
    City,
    Stake,
    Language,
    Category,
    Cost,
    Tag,
}

impl From<FacetArg> for Facet {
    fn from(arg: FacetArg) -> Self {
        match arg {
            FacetArg::Country => Facet::Country,
            FacetArg::City => Facet::City,
            FacetArg::Stake => Facet::Stake,
            FacetArg::Language => Facet::Language,
            FacetArg::Category => Facet::EventType,
            FacetArg::Cost => Facet::CostType,
            FacetArg::Tag => Facet::Tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "risinggen",
            "--format",
            "json",
            "list",
            "--search",
            "stake",
            "--cost",
            "Free",
            "--sort",
            "desc",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        let query = EventQuery::from(args);
        assert_eq!(query.search, Some("stake".to_string()));
        assert_eq!(query.cost_type, Some("Free".to_string()));
        assert_eq!(query.sort, Some(SortDirection::Descending));
        assert!(!query.featured_only);
    }

    #[test]
    fn test_parse_filter_command() {
        let cli = Cli::try_parse_from(["risinggen", "filter", "costType", "Free"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(
            cli.command,
            Commands::Filter { ref field, ref value } if field == "costType" && value == "Free"
        ));
    }

    #[test]
    fn test_parse_facets_command() {
        let cli = Cli::try_parse_from(["risinggen", "facets", "language"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Facets {
                facet: FacetArg::Language
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["risinggen", "list", "--sort", "sideways"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
