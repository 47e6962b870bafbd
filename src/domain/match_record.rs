use serde::{Deserialize, Serialize};

use super::event::CanonicalEvent;

/// Canonical match shape consumed by the page renderers and indexers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub league: String,
    /// Round number parsed from the provider's round label
    pub matchday: Option<u32>,
    pub venue: String,
    /// The provider does not supply attendance on fixtures
    pub attendance: Option<u32>,
    pub kickoff: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub score: Score,
    pub status: MatchStatus,
    pub events: Vec<CanonicalEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    /// `FT`, `HT`, a live minute like `67'`, or the provider short code
    pub state: String,
    /// `1–0` style label, empty until both half-time goals are known
    pub half_time_score: String,
}
