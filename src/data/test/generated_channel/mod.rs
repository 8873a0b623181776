use crate::{
    data::generated_channel::GeneratedChannelRepository, error::AppError,
    model::voice_channel::RegisterGeneratedChannelParam,
};
use chrono::Utc;
use test_utils::{
    builder::TestBuilder,
    factory::{
        base_voice_channel::BaseVoiceChannelFactory, create_base_channel,
        create_generated_channel, generated_voice_channel::GeneratedVoiceChannelFactory,
        helpers::create_guild_with_base_channel,
    },
};

mod count;
mod mark_deleted;
mod register;
