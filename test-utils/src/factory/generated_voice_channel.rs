//! Generated voice channel factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating generated channel rows tied to a base channel.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::generated_voice_channel::GeneratedVoiceChannelFactory;
///
/// let gone = GeneratedVoiceChannelFactory::new(&db, &base)
///     .deleted_at(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct GeneratedVoiceChannelFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    guild_id: String,
    base_channel_id: String,
    creator_id: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> GeneratedVoiceChannelFactory<'a> {
    /// Creates a new factory for an active clone of `base`.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented snowflake-like string
    /// - guild_id / base_channel_id: taken from `base`
    /// - creator_id: auto-incremented snowflake-like string
    /// - deleted_at: `None`
    pub fn new(db: &'a DatabaseConnection, base: &entity::base_voice_channel::Model) -> Self {
        Self {
            db,
            channel_id: next_id().to_string(),
            guild_id: base.guild_id.clone(),
            base_channel_id: base.channel_id.clone(),
            creator_id: next_id().to_string(),
            deleted_at: None,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn creator_id(mut self, creator_id: impl Into<String>) -> Self {
        self.creator_id = creator_id.into();
        self
    }

    pub fn deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// Builds and inserts the generated channel row into the database.
    pub async fn build(self) -> Result<entity::generated_voice_channel::Model, DbErr> {
        entity::generated_voice_channel::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
            base_channel_id: ActiveValue::Set(self.base_channel_id),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active generated channel cloned from `base`.
pub async fn create_generated_channel(
    db: &DatabaseConnection,
    base: &entity::base_voice_channel::Model,
) -> Result<entity::generated_voice_channel::Model, DbErr> {
    GeneratedVoiceChannelFactory::new(db, base).build().await
}
