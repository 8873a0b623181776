//! Domain models for base channels and the clones generated from them.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A voice channel registered through `/vc create`.
///
/// Joining it spawns a personal clone for the joining member.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseChannel {
    pub id: i32,
    pub channel_id: u64,
    pub guild_id: u64,
    pub creator_id: Option<u64>,
    /// Overrides the guild template for clones of this channel.
    pub name_template: Option<String>,
    /// Next counter value handed to a clone of this channel.
    pub name_counter: i64,
    pub created_at: DateTime<Utc>,
}

impl BaseChannel {
    /// Converts an entity model to the base channel domain model.
    ///
    /// # Returns
    /// - `Ok(BaseChannel)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::base_voice_channel::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            creator_id: entity.creator_id.map(parse_u64_from_string).transpose()?,
            name_template: entity.name_template,
            name_counter: entity.name_counter,
            created_at: entity.created_at,
        })
    }
}

/// A clone spawned from a base channel.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedChannel {
    pub id: i32,
    pub channel_id: u64,
    pub guild_id: u64,
    /// Base channel this clone was copied from.
    pub base_channel_id: u64,
    /// Member whose join spawned the clone.
    pub creator_id: u64,
    pub created_at: DateTime<Utc>,
    /// Set once the clone has been deleted. Never cleared.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl GeneratedChannel {
    /// Converts an entity model to the generated channel domain model.
    ///
    /// # Returns
    /// - `Ok(GeneratedChannel)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::generated_voice_channel::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            base_channel_id: parse_u64_from_string(entity.base_channel_id)?,
            creator_id: parse_u64_from_string(entity.creator_id)?,
            created_at: entity.created_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Parameters for registering a freshly created base channel.
#[derive(Debug, Clone)]
pub struct RegisterBaseChannelParam {
    pub channel_id: u64,
    pub guild_id: u64,
    pub creator_id: Option<u64>,
}

/// Parameters for registering a freshly created clone.
#[derive(Debug, Clone)]
pub struct RegisterGeneratedChannelParam {
    pub channel_id: u64,
    pub guild_id: u64,
    pub base_channel_id: u64,
    pub creator_id: u64,
}

/// Parameters for the `/vc create` command.
#[derive(Debug, Clone)]
pub struct CreateBaseChannelParam {
    pub guild_id: u64,
    pub member_id: u64,
    /// Account name used for `{user_name}` when no explicit name is given.
    pub member_name: String,
    /// Explicit channel name. Blank names fall back to the guild template.
    pub channel_name: Option<String>,
}
