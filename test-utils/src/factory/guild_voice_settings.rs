//! Guild voice settings factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild voice settings rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_voice_settings::GuildVoiceSettingsFactory;
///
/// let settings = GuildVoiceSettingsFactory::new(&db)
///     .max_channels(2)
///     .delete_delay(5)
///     .build()
///     .await?;
/// ```
pub struct GuildVoiceSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    base_name_template: String,
    name_counter: i64,
    max_channels: i32,
    delete_delay: i32,
    log_channel_id: Option<String>,
}

impl<'a> GuildVoiceSettingsFactory<'a> {
    /// Creates a new factory with the same defaults a freshly joined guild gets.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented snowflake-like string
    /// - base_name_template: `"{user_name}'s channel"`
    /// - name_counter: `0`
    /// - max_channels: `50`
    /// - delete_delay: `30`
    /// - log_channel_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            base_name_template: "{user_name}'s channel".to_string(),
            name_counter: 0,
            max_channels: 50,
            delete_delay: 30,
            log_channel_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn base_name_template(mut self, template: impl Into<String>) -> Self {
        self.base_name_template = template.into();
        self
    }

    pub fn name_counter(mut self, name_counter: i64) -> Self {
        self.name_counter = name_counter;
        self
    }

    pub fn max_channels(mut self, max_channels: i32) -> Self {
        self.max_channels = max_channels;
        self
    }

    pub fn delete_delay(mut self, delete_delay: i32) -> Self {
        self.delete_delay = delete_delay;
        self
    }

    pub fn log_channel_id(mut self, log_channel_id: Option<String>) -> Self {
        self.log_channel_id = log_channel_id;
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_voice_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_voice_settings::Model, DbErr> {
        let now = Utc::now();

        entity::guild_voice_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            base_name_template: ActiveValue::Set(self.base_name_template),
            name_counter: ActiveValue::Set(self.name_counter),
            max_channels: ActiveValue::Set(self.max_channels),
            delete_delay: ActiveValue::Set(self.delete_delay),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild settings row with default values.
///
/// Shorthand for `GuildVoiceSettingsFactory::new(db).build().await`.
pub async fn create_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_voice_settings::Model, DbErr> {
    GuildVoiceSettingsFactory::new(db).build().await
}
