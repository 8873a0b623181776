pub use super::base_voice_channel::Entity as BaseVoiceChannel;
pub use super::generated_voice_channel::Entity as GeneratedVoiceChannel;
pub use super::guild_voice_settings::Entity as GuildVoiceSettings;
