//! Event catalog query engine.
//!
//! Every query takes any iterator of `&EventRecord` (a slice, a catalog, or
//! the output of another query) and returns a new `Vec<&EventRecord>`.
//! Inputs are never mutated, so results compose freely.

mod catalog;
mod error;
mod grouping;
mod operations;
mod query;
mod sample_data;
mod types;

pub use catalog::EventCatalog;
pub use error::{CatalogError, EventError, QueryError};
pub use grouping::{group_by_month, month_label, sort_by_start_date, MonthGroup, SortDirection};
pub use operations::{
    distinct_values, event_tags, filter_by_equality, filter_by_field, filter_by_text, find_by_id,
    is_match_all, select_featured, validate_event, EqualityField, Facet, MATCH_ALL,
};
pub use query::{run_query, EventQuery};
pub use sample_data::sample_events;
pub use types::{Accessibility, CostType, EventRecord, EventType};
