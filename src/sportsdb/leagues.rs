use crate::error::Result;
use crate::model::{League, LeaguesResponse};
use crate::sportsdb::{self, BASE_URL};

/// All leagues for a sport, by name search.
pub(crate) async fn search_leagues(
    client: &reqwest::Client,
    sport: &str,
) -> Result<Vec<League>> {
    let url = format!("{BASE_URL}/search_all_leagues.php?s={sport}");
    let response: LeaguesResponse = sportsdb::get_json(client, &url).await?;
    Ok(response.leagues.unwrap_or_default())
}
