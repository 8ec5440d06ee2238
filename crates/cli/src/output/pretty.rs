//! Pretty output formatting.

use risinggen_core::events::{event_tags, EventRecord, MonthGroup};

/// Format an event as a list row.
pub fn format_event(event: &EventRecord) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Date: {}",
        event.title,
        event.event_type,
        event.id,
        event.date_span_label()
    );
    if let Some(times) = event.time_span_label() {
        output.push_str(&format!("\n  Time: {}", times));
    }
    output.push_str(&format!("\n  Where: {}", event.locality_label()));
    output.push_str(&format!("\n  Tags: {}", event_tags(event).join(" · ")));
    if event.featured {
        output.push_str("\n  Featured");
    }
    output
}

/// Format events for display.
pub fn format_events(title: &str, events: &[&EventRecord]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("{} ({})\n", title.to_uppercase(), events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format month groups in the order given.
pub fn format_month_groups(groups: &[MonthGroup<'_>]) -> String {
    if groups.is_empty() {
        return "No events found.".to_string();
    }
    groups
        .iter()
        .map(|group| format_events(&group.label, &group.events))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the detail view of an event.
pub fn format_event_detail(event: &EventRecord) -> String {
    let mut output = format!("{}\n", event.title);
    output.push_str(&"=".repeat(event.title.chars().count()));
    if !event.description.is_empty() {
        output.push_str(&format!("\n{}\n", event.description));
    }
    output.push_str(&format!("\n  Stake: {}", event.stake));
    output.push_str(&format!("\n  Location: {}, {}", event.city, event.country));
    output.push_str(&format!("\n  Date: {}", event.date_span_label()));
    if let Some(times) = event.time_span_label() {
        output.push_str(&format!("\n  Time: {}", times));
    }
    output.push_str(&format!("\n  Type: {}", event.event_type));
    output.push_str(&format!("\n  Languages: {}", event.languages.join(", ")));
    output.push_str(&format!("\n  Tags: {}", event_tags(event).join(" · ")));
    if let Some(open) = event.registration_open {
        let status = if open { "open" } else { "closed" };
        output.push_str(&format!("\n  Registration: {}", status));
    }
    output
}

/// Format a list of facet values.
pub fn format_values(title: &str, values: &[String]) -> String {
    if values.is_empty() {
        return "No values found.".to_string();
    }
    let mut output = format!("{} ({})\n", title.to_uppercase(), values.len());
    output.push_str(&"-".repeat(40));
    for value in values {
        output.push_str(&format!("\n  {}", value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use risinggen_core::events::{group_by_month, sample_events};

    #[test]
    fn test_format_event_multi_day() {
        let events = sample_events();
        let output = format_event(&events[0]);

        assert!(output.starts_with("Area YSA Conference 2025 [Conference]"));
        assert!(output.contains("Date: 2025-03-15 → 2025-03-17"));
        assert!(output.contains("Time: 09:00 – 18:00"));
        assert!(output.contains("Where: Paris France Stake, Paris"));
        assert!(output.contains("Tags: EN · FR · Wheelchair · Captions · Paid"));
        assert!(output.contains("Featured"));
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events("Events", &[]), "No events found.");
    }

    #[test]
    fn test_format_events_header() {
        let events = sample_events();
        let refs: Vec<&EventRecord> = events.iter().collect();
        let output = format_events("Events", &refs);

        assert!(output.starts_with("EVENTS (6)\n"));
    }

    #[test]
    fn test_format_month_groups_in_order() {
        let events = sample_events();
        let output = format_month_groups(&group_by_month(&events));

        let february = output.find("FEBRUARY 2025 (2)").unwrap();
        let march = output.find("MARCH 2025 (4)").unwrap();
        assert!(february < march);
    }

    #[test]
    fn test_format_event_detail() {
        let events = sample_events();
        let output = format_event_detail(&events[4]);

        assert!(output.starts_with("Temple Trip to Bern\n==================="));
        assert!(output.contains("Location: Bern, Switzerland"));
        assert!(output.contains("Languages: EN, DE, FR, IT"));
        assert!(!output.contains("Registration"));
    }

    #[test]
    fn test_format_values() {
        let values = vec!["France".to_string(), "Germany".to_string()];
        let output = format_values("Countries", &values);

        assert_eq!(
            output,
            format!("COUNTRIES (2)\n{}\n  France\n  Germany", "-".repeat(40))
        );
        assert_eq!(format_values("Countries", &[]), "No values found.");
    }
}
