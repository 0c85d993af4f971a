use crate::error::Result;
use crate::model::{Event, EventsResponse};
use crate::sportsdb::{self, BASE_URL};

/// The next scheduled events for a league (up to 15 per the API).
pub(crate) async fn next_league_events(
    client: &reqwest::Client,
    league_id: &str,
) -> Result<Vec<Event>> {
    let url = format!("{BASE_URL}/eventsnextleague.php?id={league_id}");
    let response: EventsResponse = sportsdb::get_json(client, &url).await?;
    Ok(response.events.unwrap_or_default())
}

/// The most recent completed events for a league.
pub(crate) async fn past_league_events(
    client: &reqwest::Client,
    league_id: &str,
) -> Result<Vec<Event>> {
    let url = format!("{BASE_URL}/eventspastleague.php?id={league_id}");
    let response: EventsResponse = sportsdb::get_json(client, &url).await?;
    Ok(response.events.unwrap_or_default())
}
