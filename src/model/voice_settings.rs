//! Domain model for per-guild voice configuration.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Template used for new guilds and for clones whose base has no override.
pub const DEFAULT_BASE_NAME_TEMPLATE: &str = "{user_name}'s channel";
/// Generated channels a guild may have at once unless configured otherwise.
pub const DEFAULT_MAX_CHANNELS: i32 = 50;
/// Seconds an empty generated channel survives unless configured otherwise.
pub const DEFAULT_DELETE_DELAY_SECONDS: i32 = 30;

/// Voice feature settings of one guild.
///
/// Created lazily the first time the guild is touched and never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildVoiceSettings {
    pub id: i32,
    pub guild_id: u64,
    /// Fallback name template, supports `{user_name}` and `{count}`.
    pub base_name_template: String,
    /// Next guild-wide counter value to hand out.
    pub name_counter: i64,
    /// Maximum number of active generated channels in the guild.
    pub max_channels: i32,
    /// Seconds an empty generated channel survives before deletion.
    pub delete_delay_seconds: i32,
    /// Text channel receiving audit messages, if configured.
    pub log_channel_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildVoiceSettings {
    /// Converts an entity model to the settings domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildVoiceSettings)` - The converted settings domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::guild_voice_settings::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let log_channel_id = entity
            .log_channel_id
            .map(parse_u64_from_string)
            .transpose()?;

        Ok(Self {
            id: entity.id,
            guild_id,
            base_name_template: entity.base_name_template,
            name_counter: entity.name_counter,
            max_channels: entity.max_channels,
            delete_delay_seconds: entity.delete_delay,
            log_channel_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}
