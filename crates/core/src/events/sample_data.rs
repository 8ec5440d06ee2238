//! Built-in sample catalog.
//!
//! The six activities shown on the public activity calendar. Used as the
//! default catalog when no data file is configured, and as fixtures in tests.

use chrono::{NaiveDate, NaiveTime};

use super::types::{CostType, EventRecord, EventType};

/// Returns the sample events in their canonical order.
///
/// # Example
///
/// ```
/// use risinggen_core::events::sample_events;
///
/// let events = sample_events();
/// assert_eq!(events.len(), 6);
/// assert_eq!(events.iter().filter(|e| e.featured).count(), 3);
/// ```
pub fn sample_events() -> Vec<EventRecord> {
    let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    vec![
        EventRecord::new(
            "area-ysa-conference-2025",
            "Area YSA Conference 2025",
            date(2025, 3, 15),
            EventType::Conference,
        )
        .with_description(
            "Annual multi-day conference uniting YSA across Europe in worship, service, and connection.",
        )
        .with_end_date(date(2025, 3, 17))
        .with_times(time(9, 0), Some(time(18, 0)))
        .with_locality("Paris France Stake", "Paris", "France")
        .with_languages(["EN", "FR"])
        .with_tags(["Conference"])
        .with_accessibility(true, true)
        .with_cost_type(CostType::Paid)
        .with_featured(true)
        .with_image("/images/sample/event1.jpg"),
        EventRecord::new(
            "community-service-day-munich",
            "Community Service Day",
            date(2025, 2, 28),
            EventType::ServiceProject,
        )
        .with_description("Serving together to bless local communities and build unity.")
        .with_times(time(14, 0), Some(time(17, 0)))
        .with_locality("Munich Germany Stake", "Munich", "Germany")
        .with_languages(["EN", "DE"])
        .with_tags(["Service"])
        .with_accessibility(true, false)
        .with_cost_type(CostType::Free)
        .with_featured(true)
        .with_image("/images/sample/event2.jpg"),
        EventRecord::new(
            "multi-stake-social-evening-barcelona",
            "Multi-Stake Social Evening",
            date(2025, 3, 8),
            EventType::Social,
        )
        .with_description(
            "Cross-stake gathering for connection, games, music, and uplifting conversation.",
        )
        .with_times(time(18, 0), Some(time(22, 0)))
        .with_locality("Barcelona Spain Stake", "Barcelona", "Spain")
        .with_languages(["EN", "ES"])
        .with_tags(["Multi-Stake"])
        .with_accessibility(true, false)
        .with_cost_type(CostType::Donation)
        .with_featured(true)
        .with_image("/images/sample/event3.jpg"),
        EventRecord::new(
            "institute-class-book-of-mormon-amsterdam",
            "Institute Class: Book of Mormon",
            date(2025, 2, 22),
            EventType::InstituteClass,
        )
        .with_description(
            "Weekly institute class focused on applying teachings to daily discipleship.",
        )
        .with_times(time(19, 0), Some(time(20, 30)))
        .with_locality("Amsterdam Netherlands Stake", "Amsterdam", "Netherlands")
        .with_languages(["EN", "NL"])
        .with_tags(["Institute Class"])
        .with_accessibility(false, true)
        .with_cost_type(CostType::Donation)
        .with_image("/images/sample/event4.jpg"),
        EventRecord::new(
            "temple-trip-bern",
            "Temple Trip to Bern",
            date(2025, 3, 14),
            EventType::TempleTrip,
        )
        .with_description("Group visit to the temple focused on service and spiritual renewal.")
        .with_times(time(8, 0), Some(time(19, 0)))
        .with_locality("Multiple Stakes, Bern Switzerland", "Bern", "Switzerland")
        .with_languages(["EN", "DE", "FR", "IT"])
        .with_tags(["Temple Trip"])
        .with_accessibility(true, false)
        .with_cost_type(CostType::Paid)
        .with_image("/images/sample/event5.jpg"),
        EventRecord::new(
            "stake-activity-sports-day-rome",
            "Stake Activity: Sports Day",
            date(2025, 3, 1),
            EventType::WardActivity,
        )
        .with_description("Friendly sports competitions and inclusive physical activities.")
        .with_times(time(10, 0), Some(time(16, 0)))
        .with_locality("Rome Italy Stake", "Rome", "Italy")
        .with_languages(["EN", "IT"])
        .with_tags(["Ward Activity"])
        .with_cost_type(CostType::Free)
        .with_image("/images/sample/event6.jpg"),
    ]
}
