use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use super::timeline::assemble_value;
use crate::constants::{STATUS_FULL_TIME, STATUS_HALF_TIME};
use crate::domain::raw::{RawFixture, RawStatus, RawTeamRef};
use crate::domain::{MatchRecord, MatchStatus, ProviderTeamId, Score};
use crate::error::{Result, TimelineError};

/// Provider team id to canonical slug overrides
pub type TeamSlugs = HashMap<ProviderTeamId, String>;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));
static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*$").expect("valid regex"));

/// Map one provider fixture and its events onto the canonical match record.
///
/// Fails only when the fixture has no id, since every event id derives from it.
pub fn normalize_fixture(
    raw: &RawFixture,
    raw_events: &Value,
    slugs: &TeamSlugs,
) -> Result<MatchRecord> {
    let fixture_id = raw
        .fixture
        .id
        .ok_or_else(|| TimelineError::MissingField("fixture.id".to_string()))?
        .to_string();

    let home = &raw.teams.home;
    let away = &raw.teams.away;

    let events = assemble_value(raw_events, home.id, away.id, &fixture_id);

    let record = MatchRecord {
        id: fixture_id,
        league: raw.league.name.clone().unwrap_or_default(),
        matchday: raw.league.round.as_deref().and_then(parse_matchday),
        venue: raw
            .fixture
            .venue
            .as_ref()
            .and_then(|v| v.name.clone())
            .unwrap_or_default(),
        attendance: None,
        kickoff: raw.fixture.date.clone().unwrap_or_default(),
        home_team_id: team_slug(home, slugs),
        away_team_id: team_slug(away, slugs),
        score: Score {
            home: raw.goals.home.unwrap_or(0),
            away: raw.goals.away.unwrap_or(0),
        },
        status: MatchStatus {
            state: status_state(raw.fixture.status.as_ref()),
            half_time_score: half_time_score(raw),
        },
        events,
    };

    debug!(
        match_id = %record.id,
        home = %record.home_team_id,
        away = %record.away_team_id,
        state = %record.status.state,
        "normalized fixture"
    );
    Ok(record)
}

/// Canonical slug for a team: configured override first, otherwise derived from the name
pub fn team_slug(team: &RawTeamRef, slugs: &TeamSlugs) -> String {
    if let Some(mapped) = team.id.and_then(|id| slugs.get(&id)) {
        return mapped.clone();
    }
    team.name.as_deref().map(slugify).unwrap_or_default()
}

/// `Brighton & Hove Albion` -> `brighton-and-hove-albion`
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase().replace('&', "and");
    NON_SLUG_CHARS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// `Regular Season - 18` -> 18
pub fn parse_matchday(round: &str) -> Option<u32> {
    TRAILING_NUMBER
        .captures(round)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn status_state(status: Option<&RawStatus>) -> String {
    let Some(status) = status else {
        return String::new();
    };
    let short = status.short.as_deref().unwrap_or("");
    if short == STATUS_FULL_TIME || short == STATUS_HALF_TIME {
        return short.to_string();
    }
    match status.elapsed {
        Some(elapsed) => format!("{}'", elapsed),
        None => short.to_string(),
    }
}

fn half_time_score(raw: &RawFixture) -> String {
    match raw.score.halftime.as_ref() {
        Some(ht) => match (ht.home, ht.away) {
            (Some(h), Some(a)) => format!("{}–{}", h, a),
            _ => String::new(),
        },
        None => String::new(),
    }
}
