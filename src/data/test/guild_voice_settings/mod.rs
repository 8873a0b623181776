use crate::{
    data::guild_voice_settings::GuildVoiceSettingsRepository,
    error::AppError,
    model::voice_settings::{
        DEFAULT_BASE_NAME_TEMPLATE, DEFAULT_DELETE_DELAY_SECONDS, DEFAULT_MAX_CHANNELS,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::guild_voice_settings::GuildVoiceSettingsFactory};

mod get_or_create;
mod update;
