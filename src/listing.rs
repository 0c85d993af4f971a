use chrono::NaiveDate;
use itertools::Itertools;

use crate::classify::classify;
use crate::favorites::FavoritesStore;
use crate::model::{Event, MatchStatus, SportCategory};

/// One match prepared for display: the record, its lifecycle bucket, and
/// whether the user starred it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub event: Event,
    pub status: MatchStatus,
    pub favorite: bool,
}

/// Classify and annotate a fetched list for presentation.
///
/// Pure mapping; callers re-run it whenever the fetched list, the active
/// tab, or favorite state changes.
pub fn assemble(events: &[Event], favorites: &FavoritesStore, today: NaiveDate) -> Vec<MatchRow> {
    events
        .iter()
        .map(|event| MatchRow {
            status: classify(event, today),
            favorite: favorites.is_favorite(&event.id),
            event: event.clone(),
        })
        .collect()
}

/// Restrict a list to one bucket using the same classification as
/// [`assemble`], so a filter can never disagree with the displayed variant.
pub fn filter_by_status(events: &[Event], status: MatchStatus, today: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| classify(e, today) == status)
        .cloned()
        .collect()
}

/// Search-screen filter: optional sport restriction plus case-insensitive
/// substring match over team, league, and event names.
///
/// A blank query skips the text filter. Duplicate ids are dropped keeping
/// the first occurrence, since the search pool merges the live, upcoming,
/// and recent lists.
pub fn search(events: &[Event], query: &str, sport: SportCategory) -> Vec<Event> {
    let query = query.trim().to_lowercase();
    events
        .iter()
        .filter(|e| sport.matches(&e.sport))
        .filter(|e| {
            query.is_empty()
                || e.home_team.to_lowercase().contains(&query)
                || e.away_team.to_lowercase().contains(&query)
                || e.league.to_lowercase().contains(&query)
                || e.name.to_lowercase().contains(&query)
        })
        .unique_by(|e| e.id.clone())
        .cloned()
        .collect()
}
