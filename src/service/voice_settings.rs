//! Guild settings commands.
//!
//! Validates the values members submit through `/vc setting ...` and
//! `/vc log_channel` before they reach the store.

use sea_orm::DatabaseConnection;

use crate::{
    data::{base_channel::BaseChannelRepository, guild_voice_settings::GuildVoiceSettingsRepository},
    error::{voice::VoiceError, AppError},
    model::voice_settings::GuildVoiceSettings,
    service::naming,
};

/// Accepted range for the generated channel limit.
pub const MAX_CHANNELS_RANGE: std::ops::RangeInclusive<i32> = 1..=500;
/// Accepted range for the deletion delay, in seconds.
pub const DELETE_DELAY_RANGE: std::ops::RangeInclusive<i32> = 5..=3600;

pub struct VoiceSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoiceSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the guild's settings, creating defaults on first use.
    pub async fn get(&self, guild_id: u64) -> Result<GuildVoiceSettings, AppError> {
        GuildVoiceSettingsRepository::new(self.db)
            .get_or_create(guild_id)
            .await
    }

    /// Sets the clone name template of a base channel.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was run in
    /// - `base_channel_id` - Channel picked by the member
    /// - `template` - New template, cut to the channel name limit
    ///
    /// # Returns
    /// - `Ok(String)` - The template as stored
    /// - `Err(VoiceError::ValidationFailed)` - The channel is not a base channel of this guild,
    ///   or the template is blank
    pub async fn set_base_template(
        &self,
        guild_id: u64,
        base_channel_id: u64,
        template: &str,
    ) -> Result<String, AppError> {
        if template.trim().is_empty() {
            return Err(VoiceError::ValidationFailed(
                "The channel name template cannot be empty.".to_string(),
            )
            .into());
        }

        let repo = BaseChannelRepository::new(self.db);

        let base = repo
            .find_by_channel_id(base_channel_id)
            .await?
            .filter(|base| base.guild_id == guild_id)
            .ok_or_else(|| {
                VoiceError::ValidationFailed(
                    "That channel is not a base channel created with /vc create in this server."
                        .to_string(),
                )
            })?;

        let template = naming::clamp(template);
        repo.set_template(base.channel_id, &template).await?;

        tracing::info!(
            "Set name template of base channel {} in guild {} to {:?}",
            base.channel_id,
            guild_id,
            template
        );

        Ok(template)
    }

    /// Sets the guild's generated channel limit.
    ///
    /// # Returns
    /// - `Ok(GuildVoiceSettings)` - Updated settings
    /// - `Err(VoiceError::ValidationFailed)` - Limit outside 1..=500
    pub async fn set_max_channels(
        &self,
        guild_id: u64,
        max_channels: i64,
    ) -> Result<GuildVoiceSettings, AppError> {
        let value = checked_in_range(max_channels, MAX_CHANNELS_RANGE).ok_or_else(|| {
            VoiceError::ValidationFailed(format!(
                "Max channels must be between {} and {}.",
                MAX_CHANNELS_RANGE.start(),
                MAX_CHANNELS_RANGE.end()
            ))
        })?;

        GuildVoiceSettingsRepository::new(self.db)
            .update_max_channels(guild_id, value)
            .await
    }

    /// Sets how long an empty generated channel survives.
    ///
    /// # Returns
    /// - `Ok(GuildVoiceSettings)` - Updated settings
    /// - `Err(VoiceError::ValidationFailed)` - Delay outside 5..=3600 seconds
    pub async fn set_delete_delay(
        &self,
        guild_id: u64,
        seconds: i64,
    ) -> Result<GuildVoiceSettings, AppError> {
        let value = checked_in_range(seconds, DELETE_DELAY_RANGE).ok_or_else(|| {
            VoiceError::ValidationFailed(format!(
                "Delete delay must be between {} and {} seconds.",
                DELETE_DELAY_RANGE.start(),
                DELETE_DELAY_RANGE.end()
            ))
        })?;

        GuildVoiceSettingsRepository::new(self.db)
            .update_delete_delay(guild_id, value)
            .await
    }

    /// Sets the text channel receiving audit messages.
    pub async fn set_log_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<GuildVoiceSettings, AppError> {
        GuildVoiceSettingsRepository::new(self.db)
            .update_log_channel(guild_id, Some(channel_id))
            .await
    }
}

fn checked_in_range(value: i64, range: std::ops::RangeInclusive<i32>) -> Option<i32> {
    i32::try_from(value).ok().filter(|value| range.contains(value))
}
