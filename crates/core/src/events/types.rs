use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_optional_date, deserialize_optional_string, deserialize_optional_time,
    serialize_optional_time,
};

/// Case-insensitive comparison using full Unicode lowercasing, so that
/// locality names like "Österreich" compare the same way text search does.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// The kind of activity an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Conference,
    #[serde(rename = "Service Project")]
    ServiceProject,
    Social,
    #[serde(rename = "Institute Class")]
    InstituteClass,
    #[serde(rename = "Temple Trip")]
    TempleTrip,
    #[serde(rename = "Multi-Stake")]
    MultiStake,
    #[serde(rename = "Ward Activity")]
    WardActivity,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::Conference,
        EventType::ServiceProject,
        EventType::Social,
        EventType::InstituteClass,
        EventType::TempleTrip,
        EventType::MultiStake,
        EventType::WardActivity,
    ];

    /// Returns the human-readable label, which is also the wire name.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Conference => "Conference",
            EventType::ServiceProject => "Service Project",
            EventType::Social => "Social",
            EventType::InstituteClass => "Institute Class",
            EventType::TempleTrip => "Temple Trip",
            EventType::MultiStake => "Multi-Stake",
            EventType::WardActivity => "Ward Activity",
        }
    }

    /// Case-insensitive match against the label.
    pub fn matches(&self, value: &str) -> bool {
        eq_ignore_case(self.label(), value)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How attendance is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostType {
    Free,
    Donation,
    /// Serialized as `Cost` to stay compatible with the site's data files.
    #[serde(rename = "Cost", alias = "Paid")]
    Paid,
}

impl CostType {
    pub const ALL: [CostType; 3] = [CostType::Free, CostType::Donation, CostType::Paid];

    pub fn label(&self) -> &'static str {
        match self {
            CostType::Free => "Free",
            CostType::Donation => "Donation",
            CostType::Paid => "Paid",
        }
    }

    /// Case-insensitive match against the label. `Paid` also answers to `Cost`.
    pub fn matches(&self, value: &str) -> bool {
        eq_ignore_case(self.label(), value)
            || (*self == CostType::Paid && eq_ignore_case("Cost", value))
    }
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accessibility support offered at an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    #[serde(default)]
    pub wheelchair: bool,
    #[serde(default)]
    pub captions: bool,
}

/// A single schedulable activity in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Start date.
    #[serde(alias = "startDate")]
    pub date: NaiveDate,
    /// Last day of a multi-day event.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_time",
        serialize_with = "serialize_optional_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_time",
        serialize_with = "serialize_optional_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<NaiveTime>,
    pub stake: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "type", alias = "category")]
    pub event_type: EventType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub accessibility: Accessibility,
    pub cost_type: CostType,
    #[serde(default)]
    pub featured: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_open: Option<bool>,
}

impl EventRecord {
    /// Creates a free, single-day event with empty locality.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        event_type: EventType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date,
            end_date: None,
            start_time: None,
            end_time: None,
            stake: String::new(),
            city: String::new(),
            country: String::new(),
            languages: Vec::new(),
            event_type,
            tags: Vec::new(),
            accessibility: Accessibility::default(),
            cost_type: CostType::Free,
            featured: false,
            image: None,
            registration_open: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the last day of a multi-day event.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_times(mut self, start: NaiveTime, end: Option<NaiveTime>) -> Self {
        self.start_time = Some(start);
        self.end_time = end;
        self
    }

    /// Sets stake, city and country.
    pub fn with_locality(
        mut self,
        stake: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.stake = stake.into();
        self.city = city.into();
        self.country = country.into();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_accessibility(mut self, wheelchair: bool, captions: bool) -> Self {
        self.accessibility = Accessibility {
            wheelchair,
            captions,
        };
        self
    }

    pub fn with_cost_type(mut self, cost_type: CostType) -> Self {
        self.cost_type = cost_type;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns true if the event has an end date on a different day.
    pub fn is_multi_day(&self) -> bool {
        self.end_date.is_some_and(|end| end != self.date)
    }

    /// Returns the last day of the event (the start date for single-day events).
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.date)
    }

    /// Renders the date span, e.g. `2025-03-15 → 2025-03-17`.
    pub fn date_span_label(&self) -> String {
        match self.end_date {
            Some(end) if self.is_multi_day() => format!("{} → {}", self.date, end),
            _ => self.date.to_string(),
        }
    }

    /// Renders the time span, e.g. `09:00 – 18:00`. None without a start time.
    pub fn time_span_label(&self) -> Option<String> {
        let start = self.start_time?.format("%H:%M");
        Some(match self.end_time {
            Some(end) => format!("{} – {}", start, end.format("%H:%M")),
            None => start.to_string(),
        })
    }

    /// Renders `stake, city` for list rows.
    pub fn locality_label(&self) -> String {
        format!("{}, {}", self.stake, self.city)
    }
}
