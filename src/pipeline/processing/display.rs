use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MODE_COMPACT, MODE_FULL};
use crate::domain::{CanonicalEvent, EventKind};

/// How much of a timeline a page shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Result view: scoring events and dismissals only
    #[default]
    Compact,
    Full,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Compact => MODE_COMPACT,
            ViewMode::Full => MODE_FULL,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            MODE_COMPACT => Ok(ViewMode::Compact),
            MODE_FULL => Ok(ViewMode::Full),
            other => Err(format!(
                "unknown view mode '{}', expected one of: {}",
                other,
                crate::constants::get_supported_modes().join(", ")
            )),
        }
    }
}

/// Whether an event kind appears in the given mode.
/// Only reads `kind`, so it stays valid for any classifier change that keeps
/// the kind vocabulary.
pub fn is_visible(event: &CanonicalEvent, mode: ViewMode) -> bool {
    match mode {
        ViewMode::Full => true,
        ViewMode::Compact => matches!(
            event.kind(),
            EventKind::Goal | EventKind::OwnGoal | EventKind::Red
        ),
    }
}

/// Per-render display state: the mode plus the noise rule for confirmed
/// penalty reviews. Passed explicitly to whatever renders the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFilter {
    pub mode: ViewMode,
    pub hide_penalty_confirmed: bool,
}

impl DisplayFilter {
    pub fn new(mode: ViewMode, hide_penalty_confirmed: bool) -> Self {
        Self {
            mode,
            hide_penalty_confirmed,
        }
    }

    pub fn visible(&self, event: &CanonicalEvent) -> bool {
        if self.hide_penalty_confirmed && event.kind() == EventKind::VarPenConfirmed {
            return false;
        }
        is_visible(event, self.mode)
    }

    pub fn apply<'a>(&self, events: &'a [CanonicalEvent]) -> Vec<&'a CanonicalEvent> {
        events.iter().filter(|e| self.visible(e)).collect()
    }
}

impl Default for DisplayFilter {
    fn default() -> Self {
        Self::new(ViewMode::Compact, true)
    }
}
