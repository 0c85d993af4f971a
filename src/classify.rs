use chrono::{NaiveDate, Utc};

use crate::model::{Event, MatchStatus};

/// The calendar date used as the classification boundary.
///
/// Always UTC, so matches near midnight land in the same bucket on every
/// device regardless of local time zone.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Assign a match to its lifecycle bucket relative to `today`.
///
/// The comparison is calendar-date equality, never a timestamp comparison.
/// A match with no usable date falls into [`MatchStatus::Recent`]. Results
/// must not be cached: "today" changes over the process lifetime, so every
/// query recomputes against a fresh date.
pub fn classify(event: &Event, today: NaiveDate) -> MatchStatus {
    match event.date {
        Some(date) if date == today => MatchStatus::Live,
        Some(date) if date > today => MatchStatus::Upcoming,
        _ => MatchStatus::Recent,
    }
}
