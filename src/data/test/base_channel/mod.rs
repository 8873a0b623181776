use crate::{
    data::base_channel::BaseChannelRepository, error::AppError,
    model::voice_channel::RegisterBaseChannelParam,
};
use test_utils::{builder::TestBuilder, factory::base_voice_channel::BaseVoiceChannelFactory};

mod register;
mod template;
