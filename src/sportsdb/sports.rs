use crate::error::Result;
use crate::model::{Sport, SportsResponse};
use crate::sportsdb::{self, BASE_URL};

/// Every sport the API knows about.
pub(crate) async fn all_sports(client: &reqwest::Client) -> Result<Vec<Sport>> {
    let url = format!("{BASE_URL}/all_sports.php");
    let response: SportsResponse = sportsdb::get_json(client, &url).await?;
    Ok(response.sports.unwrap_or_default())
}
