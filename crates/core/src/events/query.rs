//! Combined query over an event collection.
//!
//! Mirrors the activity calendar's search bar and filter menu. Pure data
//! plus one pure function, so shells can deserialize a query from wherever
//! they receive it and run it against a borrowed catalog.

use serde::{Deserialize, Serialize};

use super::grouping::{sort_by_start_date, SortDirection};
use super::operations::{filter_by_field, filter_by_text, select_featured, EqualityField};
use super::types::EventRecord;
use crate::serde::deserialize_optional_string;

/// Search text, equality filters, featured selection and ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub search: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_type: Option<String>,
    #[serde(default)]
    pub featured_only: bool,
    /// Keep input order when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_cost_type(mut self, cost_type: impl Into<String>) -> Self {
        self.cost_type = Some(cost_type.into());
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sort = Some(direction);
        self
    }

    /// Returns true if running the query keeps every event in input order.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.country.is_none()
            && self.category.is_none()
            && self.cost_type.is_none()
            && !self.featured_only
            && self.sort.is_none()
    }

    fn equality_filters(&self) -> impl Iterator<Item = (EqualityField, &str)> {
        [
            (EqualityField::Country, self.country.as_deref()),
            (EqualityField::Category, self.category.as_deref()),
            (EqualityField::CostType, self.cost_type.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Runs a query: text search, then equality filters, then featured
/// selection, then the optional sort.
///
/// # Example
///
/// ```
/// use risinggen_core::events::{run_query, sample_events, EventQuery};
///
/// let events = sample_events();
/// let query = EventQuery::new().with_search("stake").with_country("Italy");
/// let results = run_query(&events, &query);
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].city, "Rome");
/// ```
pub fn run_query<'a, I>(events: I, query: &EventQuery) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut results = filter_by_text(events, query.search.as_deref().unwrap_or_default());

    for (field, value) in query.equality_filters() {
        results = filter_by_field(results, field, value);
    }

    if query.featured_only {
        results = select_featured(results);
    }

    match query.sort {
        Some(direction) => sort_by_start_date(results, direction),
        None => results,
    }
}
