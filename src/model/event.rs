use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single scheduled or completed fixture between two teams.
///
/// Field names follow TheSportsDB wire format via `#[serde(rename)]`.
/// Loosely-typed wire values (scores sent as strings or null, empty date
/// strings) are normalized into proper options here, at the ingestion
/// boundary, so downstream code never re-checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "idEvent")]
    pub id: String,
    #[serde(rename = "strEvent")]
    pub name: String,
    #[serde(rename = "strSport")]
    pub sport: String,
    #[serde(rename = "idLeague")]
    pub league_id: String,
    #[serde(rename = "strLeague")]
    pub league: String,
    #[serde(rename = "strSeason", default)]
    pub season: Option<String>,
    #[serde(rename = "strHomeTeam")]
    pub home_team: String,
    #[serde(rename = "strAwayTeam")]
    pub away_team: String,
    #[serde(rename = "idHomeTeam")]
    pub home_team_id: String,
    #[serde(rename = "idAwayTeam")]
    pub away_team_id: String,
    #[serde(rename = "intHomeScore", default, deserialize_with = "score")]
    pub home_score: Option<u16>,
    #[serde(rename = "intAwayScore", default, deserialize_with = "score")]
    pub away_score: Option<u16>,
    /// Calendar date of the event. `None` when the feed sent nothing usable.
    #[serde(rename = "dateEvent", default, deserialize_with = "date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "strTime", default)]
    pub time: Option<String>,
    #[serde(rename = "strTimestamp", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "strStatus", default)]
    pub status: Option<String>,
    #[serde(rename = "strThumb", default)]
    pub thumb: Option<String>,
}

/// Wire envelope of the events endpoints. The API sends `"events": null`
/// instead of an empty array when a league has nothing scheduled.
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub events: Option<Vec<Event>>,
}

/// Scores arrive as a number, a numeric string, an empty string, null, or
/// not at all. Anything non-numeric decodes to `None`.
fn score<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Int(u16),
        Text(String),
    }

    let raw = Option::<RawScore>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawScore::Int(n)) => Some(n),
        Some(RawScore::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Empty or unparseable date strings decode to `None` rather than failing
/// the whole record.
fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

#[cfg(test)]
pub fn sample_event(id: &str, sport: &str, date: Option<NaiveDate>) -> Event {
    Event {
        id: id.to_string(),
        name: format!("Home vs Away {id}"),
        sport: sport.to_string(),
        league_id: "4328".to_string(),
        league: "English Premier League".to_string(),
        season: Some("2023-2024".to_string()),
        home_team: "Home FC".to_string(),
        away_team: "Away FC".to_string(),
        home_team_id: "133604".to_string(),
        away_team_id: "133616".to_string(),
        home_score: None,
        away_score: None,
        date,
        time: Some("15:00:00".to_string()),
        timestamp: None,
        status: None,
        thumb: None,
    }
}
