use std::{collections::HashSet, sync::Arc};
use tokio::sync::Mutex;

/// In-flight joins keyed by (member, channel).
///
/// Discord can deliver the same join more than once in quick succession. Only the
/// first delivery acquires the key; the rest are dropped until it is released.
#[derive(Clone, Default)]
pub struct JoinGuard {
    in_flight: Arc<Mutex<HashSet<(u64, u64)>>>,
}

impl JoinGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the key. Returns false when the key is already held.
    pub async fn try_acquire(&self, member_id: u64, channel_id: u64) -> bool {
        self.in_flight.lock().await.insert((member_id, channel_id))
    }

    pub async fn release(&self, member_id: u64, channel_id: u64) {
        self.in_flight.lock().await.remove(&(member_id, channel_id));
    }
}
