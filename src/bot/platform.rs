//! Discord-backed implementation of the voice lifecycle's platform seam.

use async_trait::async_trait;
use serenity::all::{
    Cache, ChannelId, ChannelType, CreateChannel, CreateMessage, GuildChannel, GuildId, Http,
    UserId,
};
use std::sync::Arc;

use crate::{
    error::voice::VoiceError,
    model::voice_event::{VoiceChannelSnapshot, VoiceChannelSpec},
    service::voice_lifecycle::platform::VoicePlatform,
};

/// Performs channel operations through serenity's HTTP client and reads voice
/// occupancy from the gateway cache.
pub struct SerenityPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    fn cached_channel(&self, guild_id: u64, channel_id: u64) -> Option<GuildChannel> {
        let guild = self.cache.guild(GuildId::new(guild_id))?;
        guild.channels.get(&ChannelId::new(channel_id)).cloned()
    }
}

fn snapshot(channel: GuildChannel) -> VoiceChannelSnapshot {
    VoiceChannelSnapshot {
        id: channel.id.get(),
        guild_id: channel.guild_id.get(),
        name: channel.name,
        category_id: channel.parent_id.map(|id| id.get()),
        bitrate: channel.bitrate,
        user_limit: channel.user_limit,
        overwrites: channel.permission_overwrites,
    }
}

#[async_trait]
impl VoicePlatform for SerenityPlatform {
    async fn create_voice_channel(
        &self,
        spec: VoiceChannelSpec,
    ) -> Result<VoiceChannelSnapshot, VoiceError> {
        let mut builder = CreateChannel::new(spec.name)
            .kind(ChannelType::Voice)
            .permissions(spec.overwrites);

        if let Some(category_id) = spec.category_id {
            builder = builder.category(ChannelId::new(category_id));
        }
        if let Some(bitrate) = spec.bitrate {
            builder = builder.bitrate(bitrate);
        }
        if let Some(user_limit) = spec.user_limit {
            builder = builder.user_limit(user_limit);
        }

        let channel = GuildId::new(spec.guild_id)
            .create_channel(&self.http, builder)
            .await
            .map_err(VoiceError::from_serenity)?;

        Ok(snapshot(channel))
    }

    async fn delete_channel(&self, channel_id: u64, reason: &str) -> Result<(), VoiceError> {
        self.http
            .delete_channel(ChannelId::new(channel_id), Some(reason))
            .await
            .map_err(VoiceError::from_serenity)?;

        Ok(())
    }

    async fn move_member(
        &self,
        guild_id: u64,
        member_id: u64,
        channel_id: u64,
    ) -> Result<(), VoiceError> {
        GuildId::new(guild_id)
            .move_member(&self.http, UserId::new(member_id), ChannelId::new(channel_id))
            .await
            .map_err(VoiceError::from_serenity)?;

        Ok(())
    }

    async fn send_direct_message(&self, member_id: u64, text: &str) -> Result<(), VoiceError> {
        UserId::new(member_id)
            .direct_message(&self.http, CreateMessage::new().content(text))
            .await
            .map_err(|e| VoiceError::Unreachable(e.to_string()))?;

        Ok(())
    }

    async fn send_channel_message(&self, channel_id: u64, text: &str) -> Result<(), VoiceError> {
        ChannelId::new(channel_id)
            .say(&self.http, text)
            .await
            .map_err(VoiceError::from_serenity)?;

        Ok(())
    }

    async fn voice_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<VoiceChannelSnapshot>, VoiceError> {
        if let Some(channel) = self.cached_channel(guild_id, channel_id) {
            return Ok(Some(snapshot(channel)));
        }

        match ChannelId::new(channel_id).to_channel(&self.http).await {
            Ok(channel) => Ok(channel.guild().map(snapshot)),
            Err(e) => match VoiceError::from_serenity(e) {
                VoiceError::NotFound(_) => Ok(None),
                other => Err(other),
            },
        }
    }

    fn voice_occupants(&self, guild_id: u64, channel_id: u64) -> usize {
        let Some(guild) = self.cache.guild(GuildId::new(guild_id)) else {
            return 0;
        };
        let channel_id = ChannelId::new(channel_id);

        guild
            .voice_states
            .values()
            .filter(|state| state.channel_id == Some(channel_id))
            .count()
    }

    fn member_voice_channel(&self, guild_id: u64, member_id: u64) -> Option<u64> {
        let guild = self.cache.guild(GuildId::new(guild_id))?;

        guild
            .voice_states
            .get(&UserId::new(member_id))
            .and_then(|state| state.channel_id)
            .map(|id| id.get())
    }
}
