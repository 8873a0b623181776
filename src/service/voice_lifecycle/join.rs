//! Clone creation when a member joins a base channel.

use crate::{
    data::{
        base_channel::BaseChannelRepository, counter::CounterRepository,
        generated_channel::GeneratedChannelRepository,
        guild_voice_settings::GuildVoiceSettingsRepository,
    },
    error::{voice::VoiceError, AppError},
    model::{
        voice_channel::RegisterGeneratedChannelParam,
        voice_event::{JoinOutcome, VoiceChannelSpec, VoiceStateChange},
    },
    service::{
        naming::{self, NameTokens},
        voice_lifecycle::VoiceLifecycleService,
    },
};

impl VoiceLifecycleService {
    /// Handles a member entering a channel.
    ///
    /// Channels that are not registered base channels are ignored. For a base
    /// channel the (member, channel) key is claimed first so duplicate deliveries
    /// of the same join are dropped; the key is released a short while after
    /// handling finishes.
    ///
    /// # Arguments
    /// - `change` - The voice state change that caused the join
    /// - `channel_id` - Channel the member entered
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - What the join resulted in
    /// - `Err(AppError)` - Database or Discord failure; remaining steps were skipped
    pub async fn handle_join(
        &self,
        change: &VoiceStateChange,
        channel_id: u64,
    ) -> Result<JoinOutcome, AppError> {
        if !BaseChannelRepository::new(&self.db)
            .is_base_channel(channel_id)
            .await?
        {
            return Ok(JoinOutcome::Ignored);
        }

        if !self.joins.try_acquire(change.member_id, channel_id).await {
            tracing::debug!(
                "Dropping duplicate join of {} into base channel {}",
                change.member_id,
                channel_id
            );
            return Ok(JoinOutcome::Duplicate);
        }

        let result = self.spawn_clone(change, channel_id).await;

        let joins = self.joins.clone();
        let release = self.join_release;
        let member_id = change.member_id;
        tokio::spawn(async move {
            tokio::time::sleep(release).await;
            joins.release(member_id, channel_id).await;
        });

        result
    }

    /// Creates, registers and enters the clone of a base channel for the joining member.
    async fn spawn_clone(
        &self,
        change: &VoiceStateChange,
        base_channel_id: u64,
    ) -> Result<JoinOutcome, AppError> {
        let guild_id = change.guild_id;
        let generated_repo = GeneratedChannelRepository::new(&self.db);

        let settings = GuildVoiceSettingsRepository::new(&self.db)
            .get_or_create(guild_id)
            .await?;
        let active = generated_repo.count_active_by_guild(guild_id).await?;
        let max = settings.max_channels;

        if active >= u64::try_from(max).unwrap_or(0) {
            if let Err(e) = self
                .platform
                .send_direct_message(
                    change.member_id,
                    &format!(
                        "The limit of {} temporary voice channels has been reached. Please try again later.",
                        max
                    ),
                )
                .await
            {
                tracing::debug!("Could not DM {} about the channel limit: {:?}", change.member_id, e);
            }

            self.notify_guild(
                guild_id,
                &format!(
                    "Skipped creating a channel for {}: {}",
                    change.display_name,
                    VoiceError::CapacityExceeded { active, max }
                ),
            )
            .await;

            return Ok(JoinOutcome::CapacityReached { active, max });
        }

        let source = self
            .platform
            .voice_channel(guild_id, base_channel_id)
            .await?
            .ok_or_else(|| VoiceError::NotFound(format!("base channel {}", base_channel_id)))?;

        // An empty override falls back to the guild template.
        let template = BaseChannelRepository::new(&self.db)
            .get_template(base_channel_id)
            .await?
            .filter(|template| !template.trim().is_empty())
            .unwrap_or(settings.base_name_template);
        let count = CounterRepository::new(&self.db)
            .allocate_base_counter(base_channel_id)
            .await?;
        let name = naming::render(
            &template,
            NameTokens {
                user_name: &change.member_name,
                count,
            },
        );

        let clone = self
            .platform
            .create_voice_channel(VoiceChannelSpec::clone_of(&source, name))
            .await?;

        if let Err(e) = generated_repo
            .register(RegisterGeneratedChannelParam {
                channel_id: clone.id,
                guild_id,
                base_channel_id,
                creator_id: change.member_id,
            })
            .await
        {
            if let Err(delete_err) = self
                .platform
                .delete_channel(clone.id, "Temporary voice channel could not be tracked")
                .await
            {
                tracing::warn!(
                    "Failed to remove untracked clone {}: {:?}",
                    clone.id,
                    delete_err
                );
            }
            return Err(e);
        }

        self.notify_guild(
            guild_id,
            &format!(
                "Created {} from {} for {}.",
                clone.name, source.name, change.display_name
            ),
        )
        .await;

        let moved = match self
            .platform
            .move_member(guild_id, change.member_id, clone.id)
            .await
        {
            Ok(()) => {
                self.notify_guild(
                    guild_id,
                    &format!("Moved {} to {}.", change.display_name, clone.name),
                )
                .await;
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to move {} into clone {}: {:?}",
                    change.member_id,
                    clone.id,
                    e
                );
                self.notify_guild(
                    guild_id,
                    &format!("Could not move {}: {}", change.display_name, e),
                )
                .await;
                false
            }
        };

        Ok(JoinOutcome::Created {
            channel_id: clone.id,
            name: clone.name,
            moved,
        })
    }
}
