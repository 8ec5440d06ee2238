//! Serde helpers for the static event data format.
//!
//! Hand-maintained catalog files tend to carry `""` for fields that are not
//! set. These helpers treat blank strings as `None` for optional fields.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional NaiveTime, treating empty strings as None.
/// Accepts formats: HH:MM or HH:MM:SS
pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => {
            let s = s.trim();
            NaiveTime::parse_from_str(s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// Serialize an optional NaiveTime as HH:MM, or HH:MM:SS when seconds are set.
pub fn serialize_optional_time<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match time {
        Some(t) if t.second() != 0 => {
            serializer.serialize_some(&t.format("%H:%M:%S").to_string())
        }
        Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Slot {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        image: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        end_date: Option<NaiveDate>,
        #[serde(
            default,
            deserialize_with = "deserialize_optional_time",
            serialize_with = "serialize_optional_time"
        )]
        start_time: Option<NaiveTime>,
    }

    #[test]
    fn test_deserialize_optional_string_blank() {
        let result: Slot = serde_json::from_str(r#"{"image": "   "}"#).unwrap();
        assert_eq!(result.image, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let result: Slot = serde_json::from_str(r#"{"image": "/images/sample/event1.jpg"}"#).unwrap();
        assert_eq!(result.image, Some("/images/sample/event1.jpg".to_string()));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let result: Slot = serde_json::from_str("{}").unwrap();
        assert_eq!(
            result,
            Slot {
                image: None,
                end_date: None,
                start_time: None
            }
        );
    }

    #[test]
    fn test_deserialize_optional_date_valid() {
        let result: Slot = serde_json::from_str(r#"{"endDate": "2025-03-17"}"#).unwrap();
        assert_eq!(
            result.end_date,
            Some(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_empty() {
        let result: Slot = serde_json::from_str(r#"{"endDate": ""}"#).unwrap();
        assert_eq!(result.end_date, None);
    }

    #[test]
    fn test_deserialize_optional_date_invalid() {
        let result: Result<Slot, _> = serde_json::from_str(r#"{"endDate": "17/03/2025"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_time_formats() {
        let result: Slot = serde_json::from_str(r#"{"startTime": "09:00"}"#).unwrap();
        assert_eq!(
            result.start_time,
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );

        let result: Slot = serde_json::from_str(r#"{"startTime": "19:30:15"}"#).unwrap();
        assert_eq!(
            result.start_time,
            Some(NaiveTime::from_hms_opt(19, 30, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_time_invalid() {
        let result: Result<Slot, _> = serde_json::from_str(r#"{"startTime": "evening"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_optional_time_hhmm() {
        let slot = Slot {
            image: None,
            end_date: None,
            start_time: Some(NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        };
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains(r#""startTime":"18:00""#));
    }

    #[test]
    fn test_serialize_optional_time_keeps_seconds() {
        let slot = Slot {
            image: None,
            end_date: None,
            start_time: Some(NaiveTime::from_hms_opt(19, 30, 15).unwrap()),
        };
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains(r#""startTime":"19:30:15""#));

        let parsed: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);
    }
}
