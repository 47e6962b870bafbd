//! Provider payload to canonical timeline, one step per module:
//! classify and side resolution per event, then minute ordering and
//! compression, then the match-level and round-level views built on top.

pub mod classify;
pub mod display;
pub mod fixture;
pub mod matchweek;
pub mod minute;
pub mod side;
pub mod timeline;

pub use classify::{classify, Classification};
pub use display::{is_visible, DisplayFilter, ViewMode};
pub use fixture::{normalize_fixture, TeamSlugs};
pub use matchweek::{summarize, MatchweekStats, MatchweekStatus, MatchweekSummary};
pub use minute::{format_minute, MinuteKey};
pub use side::{is_known_side, resolve_side};
pub use timeline::{assemble, assemble_value, order_timeline};
