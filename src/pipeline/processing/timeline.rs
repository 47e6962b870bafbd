use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::classify::classify;
use super::minute::{format_minute, MinuteKey};
use super::side::{is_known_side, resolve_side};
use crate::domain::{CanonicalEvent, EventBody, EventKind, ProviderTeamId, RawEvent};
use crate::metrics::TimelineMetrics;

/// Build the ordered canonical timeline for one fixture.
///
/// Ids are `{fixture_id}-{index}` by input position, so re-running on the
/// same payload reproduces the same ids, order and compression.
pub fn assemble(
    raw_events: &[RawEvent],
    home_team_id: Option<ProviderTeamId>,
    away_team_id: Option<ProviderTeamId>,
    fixture_id: &str,
) -> Vec<CanonicalEvent> {
    let events: Vec<CanonicalEvent> = raw_events
        .iter()
        .enumerate()
        .map(|(index, raw)| to_canonical(raw, index, home_team_id, away_team_id, fixture_id))
        .collect();

    let timeline = order_timeline(events);

    info!(
        fixture_id = %fixture_id,
        raw = raw_events.len(),
        events = timeline.len(),
        "assembled timeline"
    );
    TimelineMetrics::record_fixture_assembled(timeline.len());
    timeline
}

/// Same as [`assemble`] but straight from an untyped provider payload.
///
/// Anything other than a JSON array (including `null`) yields an empty
/// timeline. Array elements that are not readable events become empty
/// events so position-based ids stay aligned with the payload.
pub fn assemble_value(
    raw_events: &Value,
    home_team_id: Option<ProviderTeamId>,
    away_team_id: Option<ProviderTeamId>,
    fixture_id: &str,
) -> Vec<CanonicalEvent> {
    let Some(items) = raw_events.as_array() else {
        if !raw_events.is_null() {
            warn!(fixture_id = %fixture_id, "event payload is not an array; returning empty timeline");
        }
        TimelineMetrics::record_malformed_payload();
        return Vec::new();
    };

    let raw: Vec<RawEvent> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            RawEvent::deserialize(item).unwrap_or_else(|e| {
                warn!(fixture_id = %fixture_id, index, "unreadable event replaced by empty event: {}", e);
                TimelineMetrics::record_malformed_event();
                RawEvent::default()
            })
        })
        .collect();

    assemble(&raw, home_team_id, away_team_id, fixture_id)
}

/// Convert one provider event into its canonical form
pub fn to_canonical(
    raw: &RawEvent,
    index: usize,
    home_team_id: Option<ProviderTeamId>,
    away_team_id: Option<ProviderTeamId>,
    fixture_id: &str,
) -> CanonicalEvent {
    let classification = classify(raw.type_str(), raw.detail_str());

    let team_id = raw.team_id();
    if !is_known_side(team_id, home_team_id, away_team_id) {
        debug!(fixture_id = %fixture_id, index, ?team_id, "team id matches neither side; defaulting to home");
        TimelineMetrics::record_unknown_side();
    }
    let team = resolve_side(team_id, home_team_id, away_team_id);

    let minute = format_minute(raw.elapsed(), raw.extra());
    if MinuteKey::parse(&minute).is_unknown() {
        debug!(fixture_id = %fixture_id, index, "event has no readable minute; sorting to end");
        TimelineMetrics::record_unparsable_minute();
    }

    let player = raw.player_name();
    let body = EventBody::for_kind(classification.kind, player, raw.assist_name());

    CanonicalEvent {
        id: format!("{}-{}", fixture_id, index),
        minute,
        team,
        body,
        detail: Some(classification.detail).filter(|d| !d.is_empty()),
        player: player.to_string(),
        raw_type: raw.type_str().to_string(),
        raw_detail: raw.detail_str().to_string(),
        comments: raw.comments.clone(),
    }
}

/// Stable sort by minute followed by second-yellow compression.
///
/// Also usable on timelines that were stored before ordering was applied.
pub fn order_timeline(events: Vec<CanonicalEvent>) -> Vec<CanonicalEvent> {
    compress_second_yellows(sort_by_minute(events))
}

/// Ascending by (base, stoppage) minute; equal minutes keep their input order.
pub fn sort_by_minute(mut events: Vec<CanonicalEvent>) -> Vec<CanonicalEvent> {
    // stable, and parses each minute once
    events.sort_by_cached_key(|e| MinuteKey::parse(&e.minute));
    events
}

/// Collapse a yellow immediately followed by a red for the same player, team
/// and minute into a single red flagged `secondYellow`.
pub fn compress_second_yellows(events: Vec<CanonicalEvent>) -> Vec<CanonicalEvent> {
    let mut out: Vec<CanonicalEvent> = Vec::with_capacity(events.len());

    for ev in events {
        let pairs_with_last = ev.kind() == EventKind::Red
            && out.last().is_some_and(|prev| {
                prev.kind() == EventKind::Yellow
                    && prev.player == ev.player
                    && prev.team == ev.team
                    && prev.minute == ev.minute
            });

        if pairs_with_last {
            debug!(id = %ev.id, player = %ev.player, minute = %ev.minute, "merging yellow+red into second yellow");
            TimelineMetrics::record_second_yellow_compressed();
            out.pop();
            out.push(ev.into_second_yellow());
        } else {
            out.push(ev);
        }
    }

    out
}
