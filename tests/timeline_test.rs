use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

use match_timeline::config::Config;
use match_timeline::domain::{EventKind, RawFixture, Side};
use match_timeline::pipeline::processing::{
    assemble_value, normalize_fixture, order_timeline, summarize, MatchweekStatus, ViewMode,
};

const HOME: Option<i64> = Some(42);
const AWAY: Option<i64> = Some(50);

/// A realistic provider payload: out of order, with a double booking, a
/// substitution in the same minute and VAR noise.
fn provider_events() -> Value {
    json!([
        { "time": { "elapsed": 90, "extra": 3 }, "team": { "id": 42 },
          "player": { "name": "B. Saka" }, "assist": { "name": "M. Odegaard" },
          "type": "Goal", "detail": "Normal Goal" },
        { "time": { "elapsed": 60, "extra": null }, "team": { "id": 50 },
          "player": { "name": "Rodri" }, "assist": { "name": null },
          "type": "Card", "detail": "Yellow Card", "comments": "Foul" },
        { "time": { "elapsed": 60, "extra": null }, "team": { "id": 50 },
          "player": { "name": "Rodri" }, "assist": { "name": null },
          "type": "Card", "detail": "Red Card", "comments": "Foul" },
        { "time": { "elapsed": 60, "extra": null }, "team": { "id": 50 },
          "player": { "name": "J. Doku" }, "assist": { "name": "M. Kovacic" },
          "type": "subst", "detail": "Substitution 1" },
        { "time": { "elapsed": 12 }, "team": { "id": 42 },
          "player": { "name": "K. Havertz" }, "type": "Var", "detail": "Penalty confirmed" },
        { "time": { "elapsed": 13 }, "team": { "id": 42 },
          "player": { "name": "B. Saka" }, "type": "Goal", "detail": "Penalty" },
        { "time": { "elapsed": 45, "extra": 2 }, "team": { "id": 999 },
          "player": { "name": "Unknown" }, "type": "Goal", "detail": "Own Goal" }
    ])
}

#[test]
fn test_full_timeline_from_provider_payload() {
    let timeline = assemble_value(&provider_events(), HOME, AWAY, "1208021");

    let summary: Vec<(&str, EventKind, &str)> = timeline
        .iter()
        .map(|e| (e.minute.as_str(), e.kind(), e.player.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("12'", EventKind::VarPenConfirmed, "K. Havertz"),
            ("13'", EventKind::Goal, "B. Saka"),
            ("45'+2", EventKind::OwnGoal, "Unknown"),
            ("60'", EventKind::Red, "Rodri"),
            ("60'", EventKind::Sub, "J. Doku"),
            ("90'+3", EventKind::Goal, "B. Saka"),
        ]
    );

    let red = &timeline[3];
    assert!(red.is_second_yellow());
    assert_eq!(red.id, "1208021-2");
    assert_eq!(red.team, Side::Away);
    assert_eq!(red.comments.as_deref(), Some("Foul"));

    // unknown team id falls back to home
    assert_eq!(timeline[2].team, Side::Home);
    assert_eq!(timeline[2].detail.as_deref(), Some("og"));

    let sub = &timeline[4];
    assert_eq!(sub.out_player(), Some("J. Doku"));
    assert_eq!(sub.in_player(), Some("M. Kovacic"));
}

#[test]
fn test_serialized_shape_matches_consumer_contract() -> Result<()> {
    let timeline = assemble_value(&provider_events(), HOME, AWAY, "1208021");
    let v = serde_json::to_value(&timeline)?;

    assert_eq!(v[1]["kind"], json!("goal"));
    assert_eq!(v[1]["detail"], json!("pen"));
    assert_eq!(v[1]["rawType"], json!("Goal"));
    assert_eq!(v[1]["rawDetail"], json!("Penalty"));
    assert_eq!(v[3]["secondYellow"], json!(true));
    assert_eq!(v[4]["inPlayer"], json!("M. Kovacic"));
    assert!(v[4].get("assist").is_none());
    assert_eq!(v[5]["assist"], json!("M. Odegaard"));
    Ok(())
}

#[test]
fn test_reassembly_is_byte_identical() -> Result<()> {
    let a = serde_json::to_string(&assemble_value(&provider_events(), HOME, AWAY, "7"))?;
    let b = serde_json::to_string(&assemble_value(&provider_events(), HOME, AWAY, "7"))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_ordering_an_already_ordered_timeline_changes_nothing() {
    let timeline = assemble_value(&provider_events(), HOME, AWAY, "7");
    assert_eq!(order_timeline(timeline.clone()), timeline);
}

#[test]
fn test_display_modes_through_config() -> Result<()> {
    let timeline = assemble_value(&provider_events(), HOME, AWAY, "7");
    let config = Config::from_toml_str("")?;

    let compact = config.display_filter(None).apply(&timeline);
    let kinds: Vec<_> = compact.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![EventKind::Goal, EventKind::OwnGoal, EventKind::Red, EventKind::Goal]);

    // full mode still hides the confirmed-penalty review by default
    let full = config.display_filter(Some(ViewMode::Full)).apply(&timeline);
    assert_eq!(full.len(), timeline.len() - 1);
    Ok(())
}

#[test]
fn test_match_record_and_matchweek_from_files() -> Result<()> {
    let dir = tempdir()?;
    let config_path = dir.path().join("timeline.toml");
    fs::write(&config_path, "[teams]\n42 = \"arsenal\"\n50 = \"man-city\"\n")?;
    let config = Config::load(Some(config_path.as_path()))?;
    let slugs = config.team_slugs()?;

    let fixture: RawFixture = serde_json::from_value(json!({
        "fixture": {
            "id": 1208021,
            "date": "2025-09-21T15:30:00+00:00",
            "venue": { "name": "Emirates Stadium" },
            "status": { "short": "FT", "elapsed": 90 }
        },
        "league": { "name": "Premier League", "round": "Regular Season - 5" },
        "teams": {
            "home": { "id": 42, "name": "Arsenal" },
            "away": { "id": 50, "name": "Manchester City" }
        },
        "goals": { "home": 3, "away": 0 },
        "score": { "halftime": { "home": 1, "away": 0 } }
    }))?;

    let record = normalize_fixture(&fixture, &provider_events(), &slugs)?;
    assert_eq!(record.home_team_id, "arsenal");
    assert_eq!(record.away_team_id, "man-city");
    assert_eq!(record.matchday, Some(5));
    assert_eq!(record.events.len(), 6);
    assert!(record.events.iter().all(|e| e.id.starts_with("1208021-")));

    let summary = summarize(&[record]);
    assert_eq!(summary.status, MatchweekStatus::Completed);
    assert_eq!(summary.stats.goals, 3);
    assert_eq!(summary.stats.own_goals, 1);
    assert_eq!(summary.stats.reds, 1);
    assert_eq!(summary.stats.yellows, 0);
    assert_eq!(summary.stats.var, 1);
    assert_eq!(summary.round, Some(5));
    Ok(())
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Config::load(Some(dir.path().join("nope.toml").as_path())).is_err());
}
