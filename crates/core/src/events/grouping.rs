use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::EventRecord;

/// Direction for [`sort_by_start_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Sorts events by start date. The sort is stable in both directions:
/// events sharing a start date keep their input order.
pub fn sort_by_start_date<'a, I>(events: I, direction: SortDirection) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut sorted: Vec<&EventRecord> = events.into_iter().collect();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortDirection::Descending => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    sorted
}

/// Events sharing the calendar month of their start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup<'a> {
    pub year: i32,
    pub month: u32,
    /// Display label, e.g. "February 2025".
    pub label: String,
    pub events: Vec<&'a EventRecord>,
}

impl MonthGroup<'_> {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Formats the month of `date` as "<Month> <Year>".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Groups events by the month and year of their start date.
///
/// Groups come back in ascending chronological order. Within a group events
/// keep their input order. Multi-day events belong to their start month only.
pub fn group_by_month<'a, I>(events: I) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut grouped: BTreeMap<(i32, u32), Vec<&EventRecord>> = BTreeMap::new();

    for event in events {
        grouped
            .entry((event.date.year(), event.date.month()))
            .or_default()
            .push(event);
    }

    grouped
        .into_iter()
        .map(|((year, month), events)| MonthGroup {
            year,
            month,
            // Every group has at least one member
            label: month_label(events[0].date),
            events,
        })
        .collect()
}
