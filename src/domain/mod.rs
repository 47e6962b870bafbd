//! Data shapes shared across the pipeline: what the provider sends and what
//! the timeline produces.

pub mod event;
pub mod match_record;
pub mod raw;

pub use event::{CanonicalEvent, EventBody, EventKind, Side};
pub use match_record::{MatchRecord, MatchStatus, Score};
pub use raw::{ProviderTeamId, RawEvent, RawFixture};
