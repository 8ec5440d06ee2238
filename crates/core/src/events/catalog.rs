//! The validated, immutable event collection.

use std::collections::HashSet;

use serde::Serialize;

use super::error::CatalogError;
use super::operations::{find_by_id, validate_event};
use super::sample_data::sample_events;
use super::types::EventRecord;

/// An immutable collection of events with unique identifiers.
///
/// Built once at startup; every query borrows from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventCatalog {
    events: Vec<EventRecord>,
}

impl EventCatalog {
    /// Validates the records and builds a catalog, keeping their order.
    pub fn new(events: Vec<EventRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());

        for event in &events {
            validate_event(event).map_err(|source| CatalogError::InvalidEvent {
                id: event.id.clone(),
                source,
            })?;
            if !seen.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId(event.id.clone()));
            }
        }

        Ok(Self { events })
    }

    /// Parses a JSON array of events and validates it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<EventRecord> = serde_json::from_str(json)?;
        Self::new(events)
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            events: sample_events(),
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Looks up an event by id.
    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        find_by_id(&self.events, id)
    }
}

impl<'a> IntoIterator for &'a EventCatalog {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::error::EventError;
    use crate::events::types::EventType;
    use chrono::NaiveDate;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = EventCatalog::new(sample_events()).unwrap();
        assert_eq!(catalog, EventCatalog::sample());
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let date = make_date(2025, 3, 1);
        let events = vec![
            EventRecord::new("dup", "First", date, EventType::Social),
            EventRecord::new("dup", "Second", date, EventType::Social),
        ];

        assert_eq!(
            EventCatalog::new(events),
            Err(CatalogError::DuplicateId("dup".to_string()))
        );
    }

    #[test]
    fn test_invalid_event_rejected() {
        let events = vec![
            EventRecord::new("bad-range", "Backwards", make_date(2025, 3, 5), EventType::Social)
                .with_end_date(make_date(2025, 3, 1)),
        ];

        assert_eq!(
            EventCatalog::new(events),
            Err(CatalogError::InvalidEvent {
                id: "bad-range".to_string(),
                source: EventError::InvalidDateRange,
            })
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = EventCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "community-service-day-munich",
                "title": "Community Service Day",
                "date": "2025-02-28",
                "stake": "Munich Germany Stake",
                "city": "Munich",
                "country": "Germany",
                "type": "Service Project",
                "costType": "Free",
                "featured": true
            }
        ]"#;

        let catalog = EventCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("community-service-day-munich").unwrap().featured);
    }

    #[test]
    fn test_from_json_parse_error() {
        let result = EventCatalog::from_json(r#"[{"id": "missing-fields"}]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_json_round_trip_of_sample() {
        let catalog = EventCatalog::sample();
        let json = serde_json::to_string(&catalog).unwrap();

        assert_eq!(EventCatalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_json_round_trip_keeps_seconds() {
        let json = r#"[
            {
                "id": "x",
                "title": "Evening Devotional",
                "date": "2025-03-08",
                "startTime": "19:30:15",
                "endTime": "19:30:45",
                "stake": "Barcelona Spain Stake",
                "city": "Barcelona",
                "country": "Spain",
                "type": "Social",
                "costType": "Free"
            }
        ]"#;
        let catalog = EventCatalog::from_json(json).unwrap();

        let serialized = serde_json::to_string(&catalog).unwrap();
        assert!(serialized.contains(r#""startTime":"19:30:15""#));
        assert!(serialized.contains(r#""endTime":"19:30:45""#));
        assert_eq!(EventCatalog::from_json(&serialized).unwrap(), catalog);
    }

    #[test]
    fn test_iterates_in_input_order() {
        let catalog = EventCatalog::sample();
        let ids: Vec<&str> = (&catalog).into_iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids.first(), Some(&"area-ysa-conference-2025"));
        assert_eq!(ids.last(), Some(&"stake-activity-sports-day-rome"));
        assert_eq!(catalog.iter().count(), catalog.events().len());
    }
}
