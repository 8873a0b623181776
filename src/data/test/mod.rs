mod base_channel;
mod counter;
mod generated_channel;
mod guild_voice_settings;
