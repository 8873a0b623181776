//! Cancellable delayed deletions.
//!
//! Each schedule gets a ticket. When the delay elapses the task claims its entry
//! under the table lock, and only runs its action if the entry still carries its
//! ticket. Cancelling or rescheduling removes or replaces the entry under the same
//! lock, so exactly one of cancel and fire wins.

use std::{
    collections::HashMap,
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{sync::Mutex, task::JoinHandle};

struct PendingDeletion {
    ticket: u64,
    handle: JoinHandle<()>,
}

/// Pending deletion timers keyed by channel ID.
#[derive(Clone, Default)]
pub struct DeletionTimers {
    pending: Arc<Mutex<HashMap<u64, PendingDeletion>>>,
    next_ticket: Arc<AtomicU64>,
}

impl DeletionTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `on_fire` to run after `delay`, replacing any pending timer for
    /// the channel.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the timer belongs to
    /// - `delay` - How long to wait before firing
    /// - `on_fire` - Action run once the timer wins against cancellation
    pub async fn schedule<F>(&self, channel_id: u64, delay: Duration, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst);
        let timers = self.clone();

        let mut pending = self.pending.lock().await;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if timers.claim(channel_id, ticket).await {
                on_fire.await;
            }
        });

        if let Some(previous) = pending.insert(channel_id, PendingDeletion { ticket, handle }) {
            previous.handle.abort();
        }
    }

    /// Cancels the pending timer of a channel.
    ///
    /// # Returns
    /// - `true` - A pending timer was cancelled
    /// - `false` - Nothing was pending for this channel
    pub async fn cancel(&self, channel_id: u64) -> bool {
        match self.pending.lock().await.remove(&channel_id) {
            Some(previous) => {
                previous.handle.abort();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub async fn is_pending(&self, channel_id: u64) -> bool {
        self.pending.lock().await.contains_key(&channel_id)
    }

    /// Removes the entry if it still belongs to `ticket`.
    async fn claim(&self, channel_id: u64, ticket: u64) -> bool {
        let mut pending = self.pending.lock().await;

        match pending.get(&channel_id) {
            Some(entry) if entry.ticket == ticket => {
                pending.remove(&channel_id);
                true
            }
            _ => false,
        }
    }
}
