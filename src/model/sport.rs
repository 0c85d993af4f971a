use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// A sport as listed by the all-sports endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sport {
    #[serde(rename = "idSport")]
    pub id: String,
    #[serde(rename = "strSport")]
    pub name: String,
    #[serde(rename = "strFormat")]
    pub format: String,
    #[serde(rename = "strSportThumb", default)]
    pub thumb: Option<String>,
    #[serde(rename = "strSportDescription", default)]
    pub description: Option<String>,
}

/// Wire envelope of `all_sports.php`.
#[derive(Debug, Deserialize)]
pub struct SportsResponse {
    pub sports: Option<Vec<Sport>>,
}

/// Coarse sport grouping used to filter match lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, strum_macros::Display)]
pub enum SportCategory {
    Soccer,
    Cricket,
    Rugby,
    Basketball,
    Tennis,
    All,
}

impl SportCategory {
    /// Whether an event's reported sport name belongs to this category.
    ///
    /// The feed reports rugby fixtures as "Rugby Union".
    pub fn matches(&self, sport: &str) -> bool {
        match self {
            Self::All => true,
            Self::Rugby => matches!(sport, "Rugby" | "Rugby Union"),
            Self::Soccer => sport == "Soccer",
            Self::Cricket => sport == "Cricket",
            Self::Basketball => sport == "Basketball",
            Self::Tennis => sport == "Tennis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rugby_matches_union_alias() {
        assert!(SportCategory::Rugby.matches("Rugby"));
        assert!(SportCategory::Rugby.matches("Rugby Union"));
        assert!(!SportCategory::Rugby.matches("Soccer"));
    }

    #[test]
    fn all_matches_everything() {
        assert!(SportCategory::All.matches("Soccer"));
        assert!(SportCategory::All.matches("Darts"));
    }
}
