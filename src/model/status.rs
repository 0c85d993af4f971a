use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Lifecycle bucket of a match relative to today's calendar date.
///
/// Derived by [`crate::classify::classify`], never stored or cached.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Upcoming,
    Recent,
}
