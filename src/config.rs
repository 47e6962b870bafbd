use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::pipeline::processing::{DisplayFilter, TeamSlugs, ViewMode};

pub const DEFAULT_CONFIG_PATH: &str = "timeline.toml";
pub const CONFIG_PATH_ENV: &str = "TIMELINE_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    /// Provider team id (as a string key) to canonical team slug
    pub teams: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_mode: ViewMode,
    pub hide_penalty_confirmed: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_mode: ViewMode::Compact,
            hide_penalty_confirmed: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: String,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            file_name: "timeline.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `$TIMELINE_CONFIG` or
    /// `timeline.toml` is used if present, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        if path.exists() {
            Self::from_file(&path)
        } else {
            debug!("no config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TimelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        // surface bad team keys at load time rather than on first use
        config.team_slugs()?;
        Ok(config)
    }

    pub fn team_slugs(&self) -> Result<TeamSlugs> {
        self.teams
            .iter()
            .map(|(id, slug)| {
                id.trim()
                    .parse::<i64>()
                    .map(|id| (id, slug.clone()))
                    .map_err(|_| {
                        TimelineError::Config(format!("team id '{}' is not a number", id))
                    })
            })
            .collect()
    }

    /// Display filter for the configured defaults, with an optional mode override
    pub fn display_filter(&self, mode: Option<ViewMode>) -> DisplayFilter {
        DisplayFilter::new(
            mode.unwrap_or(self.display.default_mode),
            self.display.hide_penalty_confirmed,
        )
    }
}
