use sha2::{Digest, Sha256};

use crate::domain::{CanonicalEvent, EventKind};

/// Content identity for an event, independent of its position in the payload.
///
/// Positional ids (`{fixture}-{index}`) are what the timeline carries; this
/// key lets a consumer recognise the same occurrence across re-fetches even
/// when a provider correction reorders the list.
pub fn event_identity(fixture_id: &str, minute: &str, kind: EventKind, player: &str) -> String {
    let mut hasher = Sha256::new();
    // length-prefixed so no field value can spill into its neighbour
    for field in [fixture_id, minute, kind.as_str(), player] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }
    hex::encode(hasher.finalize())
}

impl CanonicalEvent {
    /// [`event_identity`] for this event
    pub fn identity(&self, fixture_id: &str) -> String {
        event_identity(fixture_id, &self.minute, self.kind(), &self.player)
    }
}
