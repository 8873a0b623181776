//! Voice channel lifecycle orchestration.
//!
//! Reacts to voice state changes: joining a base channel spawns a personal clone
//! and moves the member into it, and a clone that stays empty for the guild's
//! delete delay is removed again. The service is organized by concern:
//! - `join` - Clone creation when a member joins a base channel
//! - `leave` - Delayed deletion of empty clones
//! - `create` - The `/vc create` command
//! - `deletion` - Cancellable deletion timers
//! - `join_guard` - Duplicate join suppression
//! - `platform` - The Discord seam

pub mod create;
pub mod deletion;
pub mod join;
pub mod join_guard;
pub mod leave;
pub mod platform;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};

use crate::{
    data::guild_voice_settings::GuildVoiceSettingsRepository,
    model::voice_event::VoiceStateChange,
    service::voice_lifecycle::{
        deletion::DeletionTimers, join_guard::JoinGuard, platform::VoicePlatform,
    },
};

/// How long a (member, channel) join key stays claimed after handling finishes.
pub const JOIN_GUARD_RELEASE: Duration = Duration::from_millis(500);

/// Orchestrates base channels, their generated clones and clone deletion.
///
/// Cheap to clone; clones share the same timers and join guard, so one instance
/// should be created per bot process and handed to every event.
#[derive(Clone)]
pub struct VoiceLifecycleService {
    /// Database connection for settings, channel tracking and counters
    db: DatabaseConnection,
    /// Discord operations
    platform: Arc<dyn VoicePlatform>,
    /// Pending deletions of empty clones
    deletions: DeletionTimers,
    /// Joins currently being handled
    joins: JoinGuard,
    join_release: Duration,
}

impl VoiceLifecycleService {
    /// Creates a new VoiceLifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `platform` - Discord operations used by the lifecycle
    ///
    /// # Returns
    /// - `VoiceLifecycleService` - Service with no pending timers
    pub fn new(db: DatabaseConnection, platform: Arc<dyn VoicePlatform>) -> Self {
        Self {
            db,
            platform,
            deletions: DeletionTimers::new(),
            joins: JoinGuard::new(),
            join_release: JOIN_GUARD_RELEASE,
        }
    }

    /// Overrides how long join keys stay claimed after a join was handled.
    #[cfg(test)]
    pub fn with_join_release(mut self, join_release: Duration) -> Self {
        self.join_release = join_release;
        self
    }

    /// Handles one voice state change of a guild member.
    ///
    /// Runs join handling when the member entered a new channel, leave handling
    /// when they left one, and finally cancels any pending deletion of the channel
    /// they are now in. Failures are traced and posted to the guild log channel;
    /// nothing is returned to the event dispatcher.
    ///
    /// # Arguments
    /// - `change` - The member's previous and current channel
    pub async fn on_voice_state_change(&self, change: &VoiceStateChange) {
        if let Some(channel_id) = change.joined_channel() {
            if let Err(e) = self.handle_join(change, channel_id).await {
                tracing::error!(
                    "Failed to handle join of {} into channel {}: {:?}",
                    change.member_id,
                    channel_id,
                    e
                );
                self.notify_guild(
                    change.guild_id,
                    &format!(
                        "Could not create a voice channel for {}: {}",
                        change.display_name, e
                    ),
                )
                .await;
            }
        }

        if let Some(channel_id) = change.left_channel() {
            if let Err(e) = self.handle_leave(change.guild_id, channel_id).await {
                tracing::error!(
                    "Failed to handle leave of {} from channel {}: {:?}",
                    change.member_id,
                    channel_id,
                    e
                );
            }
        }

        if let Some(channel_id) = change.after {
            if self.deletions.cancel(channel_id).await {
                tracing::debug!("Cancelled pending deletion of channel {}", channel_id);
            }
        }
    }

    /// Checks whether a deletion is pending for the channel.
    #[cfg(test)]
    pub async fn is_deletion_pending(&self, channel_id: u64) -> bool {
        self.deletions.is_pending(channel_id).await
    }

    /// Posts a message to the guild's log channel.
    ///
    /// Always traced. Delivery is attempted once; a missing log channel or a
    /// failed send is not an error.
    pub(crate) async fn notify_guild(&self, guild_id: u64, text: &str) {
        tracing::info!("[guild {}] {}", guild_id, text);

        let settings = match GuildVoiceSettingsRepository::new(&self.db)
            .get_or_create(guild_id)
            .await
        {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load log channel of guild {}: {:?}", guild_id, e);
                return;
            }
        };

        let Some(log_channel_id) = settings.log_channel_id else {
            return;
        };

        if let Err(e) = self
            .platform
            .send_channel_message(log_channel_id, text)
            .await
        {
            tracing::warn!(
                "Failed to post to log channel {} of guild {}: {:?}",
                log_channel_id,
                guild_id,
                e
            );
        }
    }
}
