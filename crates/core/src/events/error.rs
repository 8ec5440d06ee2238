use thiserror::Error;

/// Errors raised by query operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid filter field: {0} (expected one of: country, category, costType)")]
    InvalidField(String),
}

/// Errors that can occur when validating a single event record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event id cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("End date must be after or equal to start date")]
    InvalidDateRange,
    #[error("End time must be after start time")]
    InvalidTimeRange,
}

/// Errors that can occur when building an event catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate event id: {0}")]
    DuplicateId(String),
    #[error("Invalid event {id}: {source}")]
    InvalidEvent {
        id: String,
        #[source]
        source: EventError,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
