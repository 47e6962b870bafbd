use crate::domain::{ProviderTeamId, Side};

/// Resolve which side an event belongs to.
///
/// Returns `Away` only on an exact match with the away id. Anything else,
/// including an absent id or one matching neither team, resolves to `Home`.
/// Callers that need strict validation check [`is_known_side`] first.
pub fn resolve_side(
    event_team_id: Option<ProviderTeamId>,
    _home_team_id: Option<ProviderTeamId>,
    away_team_id: Option<ProviderTeamId>,
) -> Side {
    match (event_team_id, away_team_id) {
        (Some(ev), Some(away)) if ev == away => Side::Away,
        _ => Side::Home,
    }
}

/// Whether the event's team id matches either participant
pub fn is_known_side(
    event_team_id: Option<ProviderTeamId>,
    home_team_id: Option<ProviderTeamId>,
    away_team_id: Option<ProviderTeamId>,
) -> bool {
    event_team_id.is_some() && (event_team_id == home_team_id || event_team_id == away_team_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: Option<i64> = Some(42);
    const AWAY: Option<i64> = Some(50);

    #[test]
    fn test_away_only_on_exact_match() {
        assert_eq!(resolve_side(Some(50), HOME, AWAY), Side::Away);
        assert_eq!(resolve_side(Some(42), HOME, AWAY), Side::Home);
    }

    #[test]
    fn test_unknown_and_missing_ids_default_to_home() {
        assert_eq!(resolve_side(None, HOME, AWAY), Side::Home);
        assert_eq!(resolve_side(Some(999), HOME, AWAY), Side::Home);
    }

    #[test]
    fn test_missing_away_id_never_matches() {
        assert_eq!(resolve_side(None, HOME, None), Side::Home);
    }

    #[test]
    fn test_is_known_side() {
        assert!(is_known_side(Some(42), HOME, AWAY));
        assert!(is_known_side(Some(50), HOME, AWAY));
        assert!(!is_known_side(Some(7), HOME, AWAY));
        assert!(!is_known_side(None, None, None));
    }
}
