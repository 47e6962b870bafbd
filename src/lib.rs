pub mod config;
pub mod constants;
pub mod error;
pub mod identity;
pub mod logging;
pub mod metrics;
pub mod pipeline;

// Domain data shapes shared across layers
pub mod domain;

pub use domain::{CanonicalEvent, EventKind, MatchRecord, RawEvent, RawFixture, Side};
pub use pipeline::processing::{assemble, assemble_value, classify, resolve_side};
