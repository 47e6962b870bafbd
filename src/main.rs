use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use match_timeline::config::Config;
use match_timeline::domain::RawFixture;
use match_timeline::logging;
use match_timeline::metrics;
use match_timeline::pipeline::processing::{
    assemble_value, normalize_fixture, summarize, TeamSlugs, ViewMode,
};

#[derive(Parser)]
#[command(name = "match_timeline")]
#[command(about = "Canonical football match timelines from provider play-by-play data")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file (defaults to $TIMELINE_CONFIG or timeline.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write JSON output to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the ordered timeline from a raw events file
    Timeline {
        /// Provider events payload (array or `{"response": [...]}`)
        #[arg(long)]
        events: PathBuf,
        #[arg(long)]
        fixture_id: String,
        /// Provider id of the home team
        #[arg(long)]
        home: Option<i64>,
        /// Provider id of the away team
        #[arg(long)]
        away: Option<i64>,
        /// Only emit events visible in this mode (compact, full)
        #[arg(long)]
        mode: Option<ViewMode>,
    },
    /// Build the canonical match record for one fixture
    Match {
        /// Provider fixture object (or a response holding exactly one)
        #[arg(long)]
        fixture: PathBuf,
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Summarize a round: status, event counts, first kickoff
    Matchweek {
        /// Provider fixtures payload for the round
        #[arg(long)]
        fixtures: PathBuf,
        /// Directory of `{fixture_id}.json` event payloads
        #[arg(long)]
        events_dir: PathBuf,
    },
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in '{}'", path.display()))
}

/// Provider endpoints wrap results as `{"response": [...]}`; accept either shape.
fn unwrap_response(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("response") => {
            map.remove("response").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn read_events(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(p) if p.exists() => Ok(unwrap_response(read_json(p)?)),
        Some(p) => {
            info!("no events at {}; events not yet published", p.display());
            Ok(Value::Array(Vec::new()))
        }
        None => Ok(Value::Array(Vec::new())),
    }
}

fn read_fixture(path: &Path) -> Result<RawFixture> {
    let value = match unwrap_response(read_json(path)?) {
        Value::Array(mut items) if items.len() == 1 => items.remove(0),
        Value::Array(items) => anyhow::bail!(
            "'{}' holds {} fixtures; expected exactly one",
            path.display(),
            items.len()
        ),
        other => other,
    };
    serde_json::from_value(value).with_context(|| format!("Invalid fixture in '{}'", path.display()))
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn run_matchweek(fixtures: &Path, events_dir: &Path, slugs: &TeamSlugs) -> Result<Value> {
    let fixtures = match unwrap_response(read_json(fixtures)?) {
        Value::Array(items) => items,
        _ => anyhow::bail!("'{}' is not a fixture list", fixtures.display()),
    };

    let mut matches = Vec::with_capacity(fixtures.len());
    for item in fixtures {
        let raw: RawFixture = match serde_json::from_value(item) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping unreadable fixture: {}", e);
                continue;
            }
        };
        let Some(id) = raw.fixture.id else {
            warn!("skipping fixture without id");
            continue;
        };

        let events = read_events(Some(events_dir.join(format!("{}.json", id)).as_path()))?;
        matches.push(normalize_fixture(&raw, &events, slugs)?);
    }

    Ok(serde_json::to_value(summarize(&matches))?)
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let _guard = logging::init_logging(&config.logging);
    metrics::init_metrics();

    let slugs = config.team_slugs()?;
    let out = cli.out.as_deref();

    match cli.command {
        Commands::Timeline {
            events,
            fixture_id,
            home,
            away,
            mode,
        } => {
            let raw = read_events(Some(events.as_path()))?;
            let timeline = assemble_value(&raw, home, away, &fixture_id);

            match mode {
                Some(mode) => {
                    let filter = config.display_filter(Some(mode));
                    emit(&filter.apply(&timeline), out)?;
                }
                None => emit(&timeline, out)?,
            }
        }
        Commands::Match { fixture, events } => {
            let raw = read_fixture(&fixture)?;
            let events = read_events(events.as_deref())?;
            let record = normalize_fixture(&raw, &events, &slugs)?;
            emit(&record, out)?;
        }
        Commands::Matchweek {
            fixtures,
            events_dir,
        } => {
            let summary = run_matchweek(&fixtures, &events_dir, &slugs)?;
            emit(&summary, out)?;
        }
    }

    Ok(())
}
