use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_FULL_TIME, STATUS_NOT_STARTED, TYPE_VAR};
use crate::domain::{EventKind, MatchRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchweekStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Event counts across every match of a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchweekStats {
    pub goals: u32,
    pub own_goals: u32,
    pub yellows: u32,
    pub reds: u32,
    pub var: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchweekSummary {
    pub round: Option<u32>,
    pub status: MatchweekStatus,
    pub stats: MatchweekStats,
    /// Earliest kickoff in the round, RFC 3339
    pub start_kickoff: Option<String>,
    pub matches: usize,
}

pub fn matchweek_status(matches: &[MatchRecord]) -> MatchweekStatus {
    let states: Vec<String> = matches
        .iter()
        .map(|m| m.status.state.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    if states.is_empty() || states.iter().all(|s| s == STATUS_NOT_STARTED) {
        MatchweekStatus::NotStarted
    } else if states.iter().all(|s| s == STATUS_FULL_TIME) {
        MatchweekStatus::Completed
    } else {
        MatchweekStatus::InProgress
    }
}

/// Count goals, own goals, cards and VAR decisions.
///
/// A VAR decision counts only as VAR, even when it is about a goal. Missed
/// penalties are not goals.
pub fn matchweek_stats(matches: &[MatchRecord]) -> MatchweekStats {
    let mut out = MatchweekStats::default();

    for ev in matches.iter().flat_map(|m| m.events.iter()) {
        let kind = ev.kind();
        let raw_type = ev.raw_type.to_lowercase();

        if raw_type == TYPE_VAR || kind.is_var() {
            out.var += 1;
            continue;
        }

        // counted by kind, not raw type: a missed penalty arrives as type
        // "Goal" but never scores
        match kind {
            EventKind::Goal => out.goals += 1,
            EventKind::OwnGoal => {
                out.goals += 1;
                out.own_goals += 1;
            }
            EventKind::Yellow => out.yellows += 1,
            EventKind::Red => out.reds += 1,
            _ => {}
        }
    }

    out
}

/// Earliest parseable kickoff among the round's matches
pub fn start_kickoff(matches: &[MatchRecord]) -> Option<DateTime<FixedOffset>> {
    matches
        .iter()
        .filter_map(|m| DateTime::parse_from_rfc3339(&m.kickoff).ok())
        .min()
}

pub fn summarize(matches: &[MatchRecord]) -> MatchweekSummary {
    MatchweekSummary {
        round: matches.iter().find_map(|m| m.matchday),
        status: matchweek_status(matches),
        stats: matchweek_stats(matches),
        start_kickoff: start_kickoff(matches).map(|k| k.to_rfc3339()),
        matches: matches.len(),
    }
}
