use serde::{Deserialize, Serialize};

/// A league as returned by the league-search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id: String,
    #[serde(rename = "strLeague")]
    pub name: String,
    #[serde(rename = "strSport")]
    pub sport: String,
    #[serde(rename = "strLeagueAlternate", default)]
    pub alternate: Option<String>,
}

/// Wire envelope of `search_all_leagues.php`.
#[derive(Debug, Deserialize)]
pub struct LeaguesResponse {
    pub leagues: Option<Vec<League>>,
}
