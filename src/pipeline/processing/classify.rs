use crate::constants::*;
use crate::domain::EventKind;

/// Result of mapping a provider (type, detail) pair onto the canonical vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: EventKind,
    /// Short qualifier; empty when the kind needs none
    pub detail: String,
}

impl Classification {
    fn new(kind: EventKind, detail: &str) -> Self {
        Self {
            kind,
            detail: detail.to_string(),
        }
    }

    fn bare(kind: EventKind) -> Self {
        Self::new(kind, "")
    }
}

/// Classify a provider event.
///
/// The table is total: anything unrecognized becomes `Other` carrying the
/// lower-cased raw detail, so nothing is dropped here. Rows are evaluated in
/// order and the first match wins.
pub fn classify(event_type: &str, detail: &str) -> Classification {
    let t = event_type.trim().to_lowercase();
    let d = detail.to_lowercase();

    let matched = match t.as_str() {
        TYPE_GOAL => Some(classify_goal(&d)),
        TYPE_CARD => classify_card(&d),
        TYPE_SUBST => Some(Classification::bare(EventKind::Sub)),
        TYPE_VAR => classify_var(&d),
        _ => None,
    };

    matched.unwrap_or_else(|| Classification {
        kind: EventKind::Other,
        detail: d,
    })
}

fn classify_goal(d: &str) -> Classification {
    if d.contains(DETAIL_OWN) {
        return Classification::new(EventKind::OwnGoal, QUALIFIER_OWN_GOAL);
    }
    if d.contains(DETAIL_PENALTY) {
        if d.contains(DETAIL_MISSED) {
            return Classification::new(EventKind::PenaltyMiss, QUALIFIER_MISSED_PENALTY);
        }
        return Classification::new(EventKind::Goal, QUALIFIER_PENALTY);
    }
    Classification::bare(EventKind::Goal)
}

fn classify_card(d: &str) -> Option<Classification> {
    let kind = if d.contains(DETAIL_SECOND) && d.contains(DETAIL_YELLOW) {
        EventKind::SecondYellow
    } else if d.contains(DETAIL_YELLOW) {
        EventKind::Yellow
    } else if d.contains(DETAIL_RED) {
        EventKind::Red
    } else {
        return None;
    };
    Some(Classification::bare(kind))
}

fn classify_var(d: &str) -> Option<Classification> {
    let kind = if d.contains(DETAIL_GOAL_CANCELLED) {
        EventKind::VarGoalCancelled
    } else if d.contains(DETAIL_GOAL_DISALLOWED) && d.contains(DETAIL_OFFSIDE) {
        EventKind::VarGoalDisallowedOffside
    } else if d.contains(DETAIL_GOAL_DISALLOWED) {
        EventKind::VarGoalDisallowed
    } else if d.contains(DETAIL_GOAL_CONFIRMED) {
        EventKind::VarGoalConfirmed
    } else if d.contains(DETAIL_PENALTY_CANCELLED) {
        EventKind::VarPenCancelled
    } else if d.contains(DETAIL_PENALTY_CONFIRMED) {
        EventKind::VarPenConfirmed
    } else if d.contains(DETAIL_CARD_UPGRADE) {
        EventKind::VarCardUpgrade
    } else {
        return None;
    };
    Some(Classification::bare(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(t: &str, d: &str, kind: EventKind, detail: &str) {
        let c = classify(t, d);
        assert_eq!(c.kind, kind, "kind for ({t:?}, {d:?})");
        assert_eq!(c.detail, detail, "detail for ({t:?}, {d:?})");
    }

    #[test]
    fn test_goal_rows() {
        check("Goal", "Normal Goal", EventKind::Goal, "");
        check("Goal", "Penalty", EventKind::Goal, "pen");
        check("Goal", "Missed Penalty", EventKind::PenaltyMiss, "missed pen");
        check("Goal", "Own Goal", EventKind::OwnGoal, "og");
        check("goal", "", EventKind::Goal, "");
    }

    #[test]
    fn test_card_rows() {
        check("Card", "Yellow Card", EventKind::Yellow, "");
        check("Card", "Red Card", EventKind::Red, "");
        check("Card", "Second Yellow card", EventKind::SecondYellow, "");
    }

    #[test]
    fn test_card_without_colour_falls_through_to_other() {
        check("Card", "Card upgrade", EventKind::Other, "card upgrade");
    }

    #[test]
    fn test_substitution_ignores_detail() {
        check("subst", "Substitution 1", EventKind::Sub, "");
        check("SUBST", "", EventKind::Sub, "");
    }

    #[test]
    fn test_var_rows() {
        check("Var", "Goal Cancelled", EventKind::VarGoalCancelled, "");
        check(
            "Var",
            "Goal Disallowed - offside",
            EventKind::VarGoalDisallowedOffside,
            "",
        );
        check("Var", "Goal Disallowed - handball", EventKind::VarGoalDisallowed, "");
        check("Var", "Goal confirmed", EventKind::VarGoalConfirmed, "");
        check("Var", "Penalty cancelled", EventKind::VarPenCancelled, "");
        check("Var", "Penalty confirmed", EventKind::VarPenConfirmed, "");
        check("Var", "Card upgrade", EventKind::VarCardUpgrade, "");
        check("Var", "Something new", EventKind::Other, "something new");
    }

    #[test]
    fn test_unknown_type_keeps_lowercased_detail() {
        check("Foo", "Bar", EventKind::Other, "bar");
        check("", "", EventKind::Other, "");
    }

    #[test]
    fn test_type_match_is_exact_not_substring() {
        // "Goalkeeper change" must not be read as a goal
        check("Goalkeeper", "Normal Goal", EventKind::Other, "normal goal");
    }
}
