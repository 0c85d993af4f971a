pub(crate) mod events;
pub(crate) mod leagues;
pub(crate) mod sports;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, SportsError};
use crate::model::SportCategory;

const BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/3";

/// League ids queried when assembling match lists for a category.
pub(crate) fn league_ids(sport: SportCategory) -> &'static [&'static str] {
    match sport {
        SportCategory::Soccer => &[
            "4328", // English Premier League
            "4335", // Spanish La Liga
            "4331", // German Bundesliga
            "4332", // Italian Serie A
            "4334", // French Ligue 1
        ],
        SportCategory::Cricket => &[
            "4420", // International Cricket
            "4421", // IPL
            "4422", // Big Bash League
        ],
        SportCategory::Rugby => &[
            "4391", // Super Rugby
            "4392", // Six Nations
            "4393", // Rugby Championship
        ],
        _ => &[],
    }
}

/// Fetch a URL and decode the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = client.get(url).send().await.map_err(|e| SportsError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SportsError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json::<T>().await.map_err(|e| SportsError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soccer_has_a_league_table() {
        assert_eq!(league_ids(SportCategory::Soccer).len(), 5);
        assert!(league_ids(SportCategory::Soccer).contains(&"4328"));
    }

    #[test]
    fn unconfigured_categories_have_no_leagues() {
        assert!(league_ids(SportCategory::Basketball).is_empty());
        assert!(league_ids(SportCategory::All).is_empty());
    }
}
