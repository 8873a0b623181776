//! Base voice channel factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating registered base channels.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::base_voice_channel::BaseVoiceChannelFactory;
///
/// let base = BaseVoiceChannelFactory::new(&db, &guild_id)
///     .channel_id("500")
///     .name_template(Some("{user_name} #{count}".to_string()))
///     .build()
///     .await?;
/// ```
pub struct BaseVoiceChannelFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    guild_id: String,
    creator_id: Option<String>,
    name_template: Option<String>,
    name_counter: i64,
}

impl<'a> BaseVoiceChannelFactory<'a> {
    /// Creates a new factory for a base channel in `guild_id`.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented snowflake-like string
    /// - creator_id: `None`
    /// - name_template: `None`
    /// - name_counter: `1`
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            channel_id: next_id().to_string(),
            guild_id: guild_id.into(),
            creator_id: None,
            name_template: None,
            name_counter: 1,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn creator_id(mut self, creator_id: Option<String>) -> Self {
        self.creator_id = creator_id;
        self
    }

    pub fn name_template(mut self, name_template: Option<String>) -> Self {
        self.name_template = name_template;
        self
    }

    pub fn name_counter(mut self, name_counter: i64) -> Self {
        self.name_counter = name_counter;
        self
    }

    /// Builds and inserts the base channel row into the database.
    pub async fn build(self) -> Result<entity::base_voice_channel::Model, DbErr> {
        entity::base_voice_channel::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
            creator_id: ActiveValue::Set(self.creator_id),
            name_template: ActiveValue::Set(self.name_template),
            name_counter: ActiveValue::Set(self.name_counter),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a base channel with default values in the given guild.
pub async fn create_base_channel(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::base_voice_channel::Model, DbErr> {
    BaseVoiceChannelFactory::new(db, guild_id).build().await
}
