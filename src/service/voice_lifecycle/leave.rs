//! Delayed deletion of empty clones.

use std::time::Duration;

use crate::{
    data::{
        counter::CounterRepository, generated_channel::GeneratedChannelRepository,
        guild_voice_settings::GuildVoiceSettingsRepository,
    },
    error::{voice::VoiceError, AppError},
    model::{voice_channel::GeneratedChannel, voice_settings::DEFAULT_DELETE_DELAY_SECONDS},
    service::voice_lifecycle::VoiceLifecycleService,
};

/// Audit log reason attached to automatic deletions.
const DELETE_REASON: &str = "Temporary voice channel is empty";

impl VoiceLifecycleService {
    /// Handles a member leaving a channel.
    ///
    /// Only active generated channels are considered. When the clone is now empty
    /// its deletion is scheduled after the guild's delete delay, replacing any
    /// deletion already pending for it.
    ///
    /// # Returns
    /// - `Ok(true)` - A deletion was scheduled
    /// - `Ok(false)` - Not a generated channel, or still occupied
    /// - `Err(AppError)` - Database failure
    pub async fn handle_leave(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        if !GeneratedChannelRepository::new(&self.db)
            .is_active(channel_id)
            .await?
        {
            return Ok(false);
        }

        if self.platform.voice_occupants(guild_id, channel_id) > 0 {
            return Ok(false);
        }

        let settings = GuildVoiceSettingsRepository::new(&self.db)
            .get_or_create(guild_id)
            .await?;
        let seconds = u64::try_from(settings.delete_delay_seconds)
            .unwrap_or(DEFAULT_DELETE_DELAY_SECONDS as u64);

        tracing::debug!(
            "Scheduling deletion of channel {} in {} seconds",
            channel_id,
            seconds
        );

        let service = self.clone();
        self.deletions
            .schedule(channel_id, Duration::from_secs(seconds), async move {
                if let Err(e) = service.delete_if_empty(guild_id, channel_id).await {
                    tracing::error!("Failed to delete generated channel {}: {:?}", channel_id, e);
                    service
                        .notify_guild(
                            guild_id,
                            &format!("Could not delete channel <#{}>: {}", channel_id, e),
                        )
                        .await;
                }
            })
            .await;

        Ok(true)
    }

    /// Deletes a clone whose deletion timer fired, unless someone came back.
    ///
    /// A channel that is already gone on Discord is still marked deleted. Once the
    /// base channel has no active clones left its counter starts over at 1.
    ///
    /// # Returns
    /// - `Ok(true)` - The clone was deleted
    /// - `Ok(false)` - The clone is occupied again, or no longer tracked as active
    /// - `Err(AppError)` - Discord refused the deletion or the database failed
    pub async fn delete_if_empty(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        if self.platform.voice_occupants(guild_id, channel_id) > 0 {
            tracing::debug!("Keeping channel {}, it is occupied again", channel_id);
            return Ok(false);
        }

        let generated_repo = GeneratedChannelRepository::new(&self.db);
        let Some(generated) = generated_repo
            .find_by_channel_id(channel_id)
            .await?
            .filter(GeneratedChannel::is_active)
        else {
            return Ok(false);
        };

        let name = match self.platform.voice_channel(guild_id, channel_id).await {
            Ok(Some(channel)) => channel.name,
            _ => format!("<#{}>", channel_id),
        };

        match self.platform.delete_channel(channel_id, DELETE_REASON).await {
            Ok(()) => {}
            Err(VoiceError::NotFound(_)) => {
                tracing::debug!("Channel {} was already removed", channel_id);
            }
            Err(e) => return Err(e.into()),
        }

        generated_repo.mark_deleted(channel_id).await?;

        if generated_repo
            .count_active_by_base(generated.base_channel_id)
            .await?
            == 0
        {
            CounterRepository::new(&self.db)
                .reset_base_counter(generated.base_channel_id)
                .await?;
        }

        self.notify_guild(guild_id, &format!("Deleted {}.", name))
            .await;

        Ok(true)
    }
}
