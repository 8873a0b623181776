//! The `/vc create` command.

use crate::{
    data::{
        base_channel::BaseChannelRepository, counter::CounterRepository,
        guild_voice_settings::GuildVoiceSettingsRepository,
    },
    error::AppError,
    model::{
        voice_channel::{BaseChannel, CreateBaseChannelParam, RegisterBaseChannelParam},
        voice_event::VoiceChannelSpec,
    },
    service::{
        naming::{self, NameTokens},
        voice_lifecycle::VoiceLifecycleService,
    },
};

impl VoiceLifecycleService {
    /// Creates a voice channel and registers it as a base channel.
    ///
    /// Without an explicit name the guild template is rendered with the member's
    /// name and the next guild counter value. The channel is placed in the category
    /// of the voice channel the member is connected to, if any. Either the channel
    /// is created and registered, or nothing is left behind.
    ///
    /// # Arguments
    /// - `param` - Guild, invoking member and optional explicit name
    ///
    /// # Returns
    /// - `Ok(BaseChannel)` - The registered base channel
    /// - `Err(AppError::VoiceErr)` - Discord refused to create the channel
    /// - `Err(AppError)` - Database failure
    pub async fn create_base_channel(
        &self,
        param: CreateBaseChannelParam,
    ) -> Result<BaseChannel, AppError> {
        let guild_id = param.guild_id;

        let explicit_name = param
            .channel_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let name = match explicit_name {
            Some(name) => naming::clamp(name),
            None => {
                let settings = GuildVoiceSettingsRepository::new(&self.db)
                    .get_or_create(guild_id)
                    .await?;
                let count = CounterRepository::new(&self.db)
                    .allocate_guild_counter(guild_id)
                    .await?;
                naming::render(
                    &settings.base_name_template,
                    NameTokens {
                        user_name: &param.member_name,
                        count,
                    },
                )
            }
        };

        let category_id = match self.platform.member_voice_channel(guild_id, param.member_id) {
            Some(current) => match self.platform.voice_channel(guild_id, current).await {
                Ok(channel) => channel.and_then(|channel| channel.category_id),
                Err(e) => {
                    tracing::debug!("Could not read category of channel {}: {:?}", current, e);
                    None
                }
            },
            None => None,
        };

        let channel = self
            .platform
            .create_voice_channel(VoiceChannelSpec::plain(guild_id, name, category_id))
            .await?;

        let base = match BaseChannelRepository::new(&self.db)
            .register(RegisterBaseChannelParam {
                channel_id: channel.id,
                guild_id,
                creator_id: Some(param.member_id),
            })
            .await
        {
            Ok(base) => base,
            Err(e) => {
                if let Err(delete_err) = self
                    .platform
                    .delete_channel(channel.id, "Base voice channel could not be registered")
                    .await
                {
                    tracing::warn!(
                        "Failed to remove unregistered base channel {}: {:?}",
                        channel.id,
                        delete_err
                    );
                }
                return Err(e);
            }
        };

        tracing::info!(
            "Created base channel {} ({}) in guild {} for {}",
            channel.name,
            channel.id,
            guild_id,
            param.member_id
        );

        Ok(base)
    }
}
