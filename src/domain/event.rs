use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two competing teams an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// The closed vocabulary of canonical event kinds.
///
/// Wire names are kebab-case (`own-goal`, `var-pen-confirmed`) and are shared
/// with the display layer, so renaming a variant is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Goal,
    OwnGoal,
    PenaltyMiss,
    SecondYellow,
    Yellow,
    Red,
    Sub,
    VarGoalCancelled,
    VarGoalDisallowedOffside,
    VarGoalDisallowed,
    VarGoalConfirmed,
    VarPenCancelled,
    VarPenConfirmed,
    VarCardUpgrade,
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Goal => "goal",
            EventKind::OwnGoal => "own-goal",
            EventKind::PenaltyMiss => "penalty-miss",
            EventKind::SecondYellow => "second-yellow",
            EventKind::Yellow => "yellow",
            EventKind::Red => "red",
            EventKind::Sub => "sub",
            EventKind::VarGoalCancelled => "var-goal-cancelled",
            EventKind::VarGoalDisallowedOffside => "var-goal-disallowed-offside",
            EventKind::VarGoalDisallowed => "var-goal-disallowed",
            EventKind::VarGoalConfirmed => "var-goal-confirmed",
            EventKind::VarPenCancelled => "var-pen-cancelled",
            EventKind::VarPenConfirmed => "var-pen-confirmed",
            EventKind::VarCardUpgrade => "var-card-upgrade",
            EventKind::Other => "other",
        }
    }

    /// True for every video-review outcome
    pub fn is_var(&self) -> bool {
        self.as_str().starts_with("var-")
    }

    /// Kinds that carry an assisting player
    pub fn is_goal_like(&self) -> bool {
        matches!(
            self,
            EventKind::Goal | EventKind::OwnGoal | EventKind::PenaltyMiss
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Kind-specific payload of a canonical event.
///
/// Serialized flat into the event under a `kind` tag, so a substitution is
/// the only thing that can carry `inPlayer`/`outPlayer` and only a red card
/// can carry `secondYellow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EventBody {
    Goal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assist: Option<String>,
    },
    OwnGoal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assist: Option<String>,
    },
    PenaltyMiss {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assist: Option<String>,
    },
    SecondYellow,
    Yellow,
    Red {
        #[serde(rename = "secondYellow", default, skip_serializing_if = "is_false")]
        second_yellow: bool,
    },
    Sub {
        #[serde(rename = "inPlayer")]
        in_player: String,
        #[serde(rename = "outPlayer")]
        out_player: String,
    },
    VarGoalCancelled,
    VarGoalDisallowedOffside,
    VarGoalDisallowed,
    VarGoalConfirmed,
    VarPenCancelled,
    VarPenConfirmed,
    VarCardUpgrade,
    Other,
}

impl EventBody {
    /// Build the payload for a classified kind.
    ///
    /// `player` and `assist` follow the provider convention: for substitutions
    /// the nominal player leaves the pitch and the assist comes on.
    pub fn for_kind(kind: EventKind, player: &str, assist: &str) -> Self {
        let assist_opt = || {
            if !kind.is_goal_like() || assist.is_empty() {
                None
            } else {
                Some(assist.to_string())
            }
        };

        match kind {
            EventKind::Goal => EventBody::Goal { assist: assist_opt() },
            EventKind::OwnGoal => EventBody::OwnGoal { assist: assist_opt() },
            EventKind::PenaltyMiss => EventBody::PenaltyMiss { assist: assist_opt() },
            EventKind::SecondYellow => EventBody::SecondYellow,
            EventKind::Yellow => EventBody::Yellow,
            EventKind::Red => EventBody::Red { second_yellow: false },
            EventKind::Sub => EventBody::Sub {
                in_player: assist.to_string(),
                out_player: player.to_string(),
            },
            EventKind::VarGoalCancelled => EventBody::VarGoalCancelled,
            EventKind::VarGoalDisallowedOffside => EventBody::VarGoalDisallowedOffside,
            EventKind::VarGoalDisallowed => EventBody::VarGoalDisallowed,
            EventKind::VarGoalConfirmed => EventBody::VarGoalConfirmed,
            EventKind::VarPenCancelled => EventBody::VarPenCancelled,
            EventKind::VarPenConfirmed => EventBody::VarPenConfirmed,
            EventKind::VarCardUpgrade => EventBody::VarCardUpgrade,
            EventKind::Other => EventBody::Other,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            EventBody::Goal { .. } => EventKind::Goal,
            EventBody::OwnGoal { .. } => EventKind::OwnGoal,
            EventBody::PenaltyMiss { .. } => EventKind::PenaltyMiss,
            EventBody::SecondYellow => EventKind::SecondYellow,
            EventBody::Yellow => EventKind::Yellow,
            EventBody::Red { .. } => EventKind::Red,
            EventBody::Sub { .. } => EventKind::Sub,
            EventBody::VarGoalCancelled => EventKind::VarGoalCancelled,
            EventBody::VarGoalDisallowedOffside => EventKind::VarGoalDisallowedOffside,
            EventBody::VarGoalDisallowed => EventKind::VarGoalDisallowed,
            EventBody::VarGoalConfirmed => EventKind::VarGoalConfirmed,
            EventBody::VarPenCancelled => EventKind::VarPenCancelled,
            EventBody::VarPenConfirmed => EventKind::VarPenConfirmed,
            EventBody::VarCardUpgrade => EventKind::VarCardUpgrade,
            EventBody::Other => EventKind::Other,
        }
    }
}

/// A normalized, presentation-agnostic match occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEvent {
    /// `{fixture_id}-{input_index}`; stable across runs on identical input
    pub id: String,
    /// Display minute, `45'` or `45'+2`
    pub minute: String,
    pub team: Side,
    #[serde(flatten)]
    pub body: EventBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub player: String,
    pub raw_type: String,
    pub raw_detail: String,
    /// Card reason as supplied by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl CanonicalEvent {
    pub fn kind(&self) -> EventKind {
        self.body.kind()
    }

    pub fn assist(&self) -> Option<&str> {
        match &self.body {
            EventBody::Goal { assist }
            | EventBody::OwnGoal { assist }
            | EventBody::PenaltyMiss { assist } => assist.as_deref(),
            _ => None,
        }
    }

    pub fn in_player(&self) -> Option<&str> {
        match &self.body {
            EventBody::Sub { in_player, .. } => Some(in_player),
            _ => None,
        }
    }

    pub fn out_player(&self) -> Option<&str> {
        match &self.body {
            EventBody::Sub { out_player, .. } => Some(out_player),
            _ => None,
        }
    }

    pub fn is_second_yellow(&self) -> bool {
        matches!(self.body, EventBody::Red { second_yellow: true })
    }

    /// Turn a red card into the single dismissal entry of a yellow+red pair.
    /// Any other kind is returned unchanged.
    pub fn into_second_yellow(mut self) -> Self {
        if let EventBody::Red { second_yellow } = &mut self.body {
            *second_yellow = true;
        }
        self
    }
}
