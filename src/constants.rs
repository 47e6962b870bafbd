/// Provider vocabulary constants used by the classifier and summaries.
/// Comparisons against these are always done on lower-cased input.

// Event types as the provider spells them (lower-cased)
pub const TYPE_GOAL: &str = "goal";
pub const TYPE_CARD: &str = "card";
pub const TYPE_SUBST: &str = "subst";
pub const TYPE_VAR: &str = "var";

// Fragments searched for inside the provider detail string
pub const DETAIL_OWN: &str = "own";
pub const DETAIL_PENALTY: &str = "penalty";
pub const DETAIL_MISSED: &str = "missed";
pub const DETAIL_SECOND: &str = "second";
pub const DETAIL_YELLOW: &str = "yellow";
pub const DETAIL_RED: &str = "red";
pub const DETAIL_GOAL_CANCELLED: &str = "goal cancelled";
pub const DETAIL_GOAL_DISALLOWED: &str = "goal disallowed";
pub const DETAIL_OFFSIDE: &str = "offside";
pub const DETAIL_GOAL_CONFIRMED: &str = "goal confirmed";
pub const DETAIL_PENALTY_CANCELLED: &str = "penalty cancelled";
pub const DETAIL_PENALTY_CONFIRMED: &str = "penalty confirmed";
pub const DETAIL_CARD_UPGRADE: &str = "card upgrade";

// Short qualifiers emitted on canonical events
pub const QUALIFIER_OWN_GOAL: &str = "og";
pub const QUALIFIER_PENALTY: &str = "pen";
pub const QUALIFIER_MISSED_PENALTY: &str = "missed pen";

// Fixture status short codes
pub const STATUS_FULL_TIME: &str = "FT";
pub const STATUS_HALF_TIME: &str = "HT";
pub const STATUS_NOT_STARTED: &str = "NS";

// Display mode names
pub const MODE_COMPACT: &str = "compact";
pub const MODE_FULL: &str = "full";

/// Get all supported display mode names
pub fn get_supported_modes() -> Vec<&'static str> {
    vec![MODE_COMPACT, MODE_FULL]
}
