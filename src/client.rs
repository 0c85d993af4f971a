use std::cmp::Reverse;

use futures::future::join_all;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::classify::{classify, today_utc};
use crate::error::Result;
use crate::model::{Event, League, MatchStatus, Sport, SportCategory};
use crate::sportsdb;

/// Cap applied to assembled match lists; the app screens show at most ten
/// matches per tab.
const MAX_MATCHES: usize = 10;

/// The main entry point for fetching sports data from TheSportsDB.
///
/// `SportsClient` wraps a [`reqwest::Client`] and exposes per-category
/// live/upcoming/recent match lists, fanning out over the category's league
/// table and joining the results. Fetch failures degrade to empty lists and
/// are logged; none of the list methods return errors.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use scorepulse::model::SportCategory;
/// use scorepulse::SportsClient;
///
/// let client = SportsClient::new();
/// let live = client.get_live_scores(SportCategory::Soccer).await;
/// println!("Found {} live matches", live.len());
/// # }
/// ```
pub struct SportsClient {
    http: reqwest::Client,
}

impl SportsClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Matches of `sport` played today, drawn from the past-events feed.
    #[instrument(skip(self))]
    pub async fn get_live_scores(&self, sport: SportCategory) -> Vec<Event> {
        let events = self.fan_out(sport, Endpoint::Past).await;
        let today = today_utc();
        let live = events
            .into_iter()
            .filter(|e| sport.matches(&e.sport))
            .filter(|e| classify(e, today) == MatchStatus::Live)
            .take(MAX_MATCHES)
            .collect_vec();
        debug!(count = live.len(), "assembled live matches");
        live
    }

    /// Scheduled matches of `sport` dated after today.
    #[instrument(skip(self))]
    pub async fn get_upcoming_matches(&self, sport: SportCategory) -> Vec<Event> {
        let events = self.fan_out(sport, Endpoint::Next).await;
        let today = today_utc();
        let upcoming = events
            .into_iter()
            .filter(|e| sport.matches(&e.sport))
            .filter(|e| classify(e, today) == MatchStatus::Upcoming)
            .take(MAX_MATCHES)
            .collect_vec();
        debug!(count = upcoming.len(), "assembled upcoming matches");
        upcoming
    }

    /// Completed matches of `sport`, most recent first.
    #[instrument(skip(self))]
    pub async fn get_recent_matches(&self, sport: SportCategory) -> Vec<Event> {
        let events = self.fan_out(sport, Endpoint::Past).await;
        let recent = events
            .into_iter()
            .filter(|e| sport.matches(&e.sport) && e.date.is_some())
            .sorted_by_key(|e| Reverse(e.date))
            .take(MAX_MATCHES)
            .collect_vec();
        debug!(count = recent.len(), "assembled recent matches");
        recent
    }

    /// Every sport the API lists; empty on failure.
    #[instrument(skip(self))]
    pub async fn get_all_sports(&self) -> Vec<Sport> {
        match sportsdb::sports::all_sports(&self.http).await {
            Ok(sports) => sports,
            Err(e) => {
                warn!(error = %e, "failed to fetch sports");
                Vec::new()
            }
        }
    }

    /// Leagues for a sport, by name search; empty on failure.
    #[instrument(skip(self))]
    pub async fn get_leagues_by_sport(&self, sport: SportCategory) -> Vec<League> {
        match sportsdb::leagues::search_leagues(&self.http, &sport.to_string()).await {
            Ok(leagues) => leagues,
            Err(e) => {
                warn!(%sport, error = %e, "failed to fetch leagues");
                Vec::new()
            }
        }
    }

    /// Fetch one endpoint across every league configured for `sport`,
    /// concurrently. Each failed league only logs and contributes nothing,
    /// so one dead league never empties the whole list.
    async fn fan_out(&self, sport: SportCategory, endpoint: Endpoint) -> Vec<Event> {
        let league_ids = sportsdb::league_ids(sport);
        if league_ids.is_empty() {
            debug!(%sport, "no leagues configured");
            return Vec::new();
        }

        let fetches = league_ids.iter().map(|id| async move {
            match endpoint {
                Endpoint::Next => sportsdb::events::next_league_events(&self.http, id).await,
                Endpoint::Past => sportsdb::events::past_league_events(&self.http, id).await,
            }
        });
        flatten_league_results(sport, join_all(fetches).await)
    }
}

impl Default for SportsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Next,
    Past,
}

fn flatten_league_results(
    sport: SportCategory,
    results: Vec<Result<Vec<Event>>>,
) -> Vec<Event> {
    results
        .into_iter()
        .flat_map(|result| match result {
            Ok(events) => events,
            Err(e) => {
                warn!(%sport, error = %e, "league fetch failed, skipping");
                Vec::new()
            }
        })
        .collect()
}
