//! Seam between the lifecycle and Discord.
//!
//! The orchestrator only talks to Discord through this trait. The bot layer
//! implements it with serenity's HTTP client and cache; tests use a recording fake.

use async_trait::async_trait;

use crate::{
    error::voice::VoiceError,
    model::voice_event::{VoiceChannelSnapshot, VoiceChannelSpec},
};

#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// Creates a voice channel and returns what was created.
    async fn create_voice_channel(
        &self,
        spec: VoiceChannelSpec,
    ) -> Result<VoiceChannelSnapshot, VoiceError>;

    /// Deletes a channel, recording `reason` in the guild audit log.
    async fn delete_channel(&self, channel_id: u64, reason: &str) -> Result<(), VoiceError>;

    /// Moves a connected member into another voice channel.
    async fn move_member(
        &self,
        guild_id: u64,
        member_id: u64,
        channel_id: u64,
    ) -> Result<(), VoiceError>;

    /// Sends a direct message. Fails with `Unreachable` when the member blocks DMs.
    async fn send_direct_message(&self, member_id: u64, text: &str) -> Result<(), VoiceError>;

    /// Posts a message in a guild text channel.
    async fn send_channel_message(&self, channel_id: u64, text: &str) -> Result<(), VoiceError>;

    /// Looks up a voice channel of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(snapshot))` - The channel exists and is a voice channel
    /// - `Ok(None)` - The channel is gone or is not a voice channel
    async fn voice_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<VoiceChannelSnapshot>, VoiceError>;

    /// Number of members currently connected to a voice channel.
    fn voice_occupants(&self, guild_id: u64, channel_id: u64) -> usize;

    /// Voice channel a member is connected to, if any.
    fn member_voice_channel(&self, guild_id: u64, member_id: u64) -> Option<u64>;
}
