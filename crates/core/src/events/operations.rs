use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::error::{EventError, QueryError};
use super::types::{eq_ignore_case, EventRecord};

/// Sentinel filter value that disables an equality filter.
pub const MATCH_ALL: &str = "all";

/// Field selectors accepted by [`filter_by_equality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqualityField {
    Country,
    Category,
    CostType,
}

impl EqualityField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EqualityField::Country => "country",
            EqualityField::Category => "category",
            EqualityField::CostType => "costType",
        }
    }
}

impl FromStr for EqualityField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "country" => Ok(EqualityField::Country),
            "category" | "type" => Ok(EqualityField::Category),
            "costType" | "cost_type" | "cost" => Ok(EqualityField::CostType),
            other => Err(QueryError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for EqualityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the filter value should bypass filtering.
pub fn is_match_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || eq_ignore_case(value, MATCH_ALL)
}

/// Filters events by a case-insensitive substring over title, description,
/// stake, city, country and tags. A blank query keeps every event.
pub fn filter_by_text<'a, I>(events: I, query: &str) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return events.into_iter().collect();
    }

    events
        .into_iter()
        .filter(|event| matches_text(event, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_text(event: &EventRecord, needle: &str) -> bool {
    [
        &event.title,
        &event.description,
        &event.stake,
        &event.city,
        &event.country,
    ]
    .into_iter()
    .chain(event.tags.iter())
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filters events whose `field` equals `value`, where `field` is one of
/// `country`, `category` or `costType`.
///
/// Comparison is case-insensitive. The [`MATCH_ALL`] sentinel (or a blank
/// value) keeps every event.
///
/// # Errors
///
/// Returns [`QueryError::InvalidField`] for any other field selector.
///
/// # Example
///
/// ```
/// use risinggen_core::events::{filter_by_equality, sample_events};
///
/// let events = sample_events();
/// let free = filter_by_equality(&events, "costType", "Free").unwrap();
/// assert_eq!(free.len(), 2);
///
/// assert!(filter_by_equality(&events, "title", "anything").is_err());
/// ```
pub fn filter_by_equality<'a, I>(
    events: I,
    field: &str,
    value: &str,
) -> Result<Vec<&'a EventRecord>, QueryError>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let field = field.parse::<EqualityField>()?;
    Ok(filter_by_field(events, field, value))
}

/// Typed variant of [`filter_by_equality`].
pub fn filter_by_field<'a, I>(events: I, field: EqualityField, value: &str) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    if is_match_all(value) {
        return events.into_iter().collect();
    }

    let value = value.trim();
    events
        .into_iter()
        .filter(|event| match field {
            EqualityField::Country => eq_ignore_case(&event.country, value),
            EqualityField::Category => event.event_type.matches(value),
            EqualityField::CostType => event.cost_type.matches(value),
        })
        .collect()
}

/// Returns the featured events in their original order.
pub fn select_featured<'a, I>(events: I) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    events.into_iter().filter(|event| event.featured).collect()
}

/// Looks up an event by its identifier.
pub fn find_by_id<'a, I>(events: I, id: &str) -> Option<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    events.into_iter().find(|event| event.id == id)
}

/// Event attributes that can be listed as filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Country,
    City,
    Stake,
    Language,
    EventType,
    CostType,
    Tag,
}

/// Returns the distinct values of a facet in first-seen order.
/// List-valued facets (languages, tags) are flattened.
pub fn distinct_values<'a, I>(events: I, facet: Facet) -> Vec<String>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for event in events {
        let candidates: Vec<&str> = match facet {
            Facet::Country => vec![event.country.as_str()],
            Facet::City => vec![event.city.as_str()],
            Facet::Stake => vec![event.stake.as_str()],
            Facet::Language => event.languages.iter().map(String::as_str).collect(),
            Facet::EventType => vec![event.event_type.label()],
            Facet::CostType => vec![event.cost_type.label()],
            Facet::Tag => event.tags.iter().map(String::as_str).collect(),
        };

        for value in candidates {
            if !value.is_empty() && seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }

    values
}

/// Builds the badge list shown on an event card: upper-cased languages,
/// accessibility flags, then the cost label.
pub fn event_tags(event: &EventRecord) -> Vec<String> {
    let mut tags: Vec<String> = event.languages.iter().map(|l| l.to_uppercase()).collect();
    if event.accessibility.wheelchair {
        tags.push("Wheelchair".to_string());
    }
    if event.accessibility.captions {
        tags.push("Captions".to_string());
    }
    tags.push(event.cost_type.label().to_string());
    tags
}

/// Validates a single event record.
pub fn validate_event(event: &EventRecord) -> Result<(), EventError> {
    if event.id.trim().is_empty() {
        return Err(EventError::EmptyId);
    }
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if let Some(end_date) = event.end_date {
        if end_date < event.date {
            return Err(EventError::InvalidDateRange);
        }
    }

    // Times repeat daily on multi-day events, so only single-day spans are checked.
    if let (Some(start), Some(end)) = (event.start_time, event.end_time) {
        if !event.is_multi_day() && end <= start {
            return Err(EventError::InvalidTimeRange);
        }
    }

    Ok(())
}
