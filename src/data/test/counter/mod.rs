use crate::{
    data::{counter::CounterRepository, guild_voice_settings::GuildVoiceSettingsRepository},
    error::AppError,
};
use test_utils::{builder::TestBuilder, factory::base_voice_channel::BaseVoiceChannelFactory};

mod allocate_base_counter;
mod allocate_guild_counter;
mod reset_base_counter;
