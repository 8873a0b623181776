//! Guild voice settings repository.
//!
//! Settings rows are created lazily: every read and write first makes sure the row
//! exists with default values, so callers never have to distinguish a new guild
//! from a configured one.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::voice_settings::{
        GuildVoiceSettings, DEFAULT_BASE_NAME_TEMPLATE, DEFAULT_DELETE_DELAY_SECONDS,
        DEFAULT_MAX_CHANNELS,
    },
};

/// Repository providing database operations for per-guild voice settings.
pub struct GuildVoiceSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildVoiceSettingsRepository<'a> {
    /// Creates a new GuildVoiceSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildVoiceSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a default settings row for the guild unless one already exists.
    ///
    /// Uses `ON CONFLICT DO NOTHING` on the guild ID so concurrent callers cannot
    /// create duplicates or overwrite configured values.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(())` - The row exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn ensure_exists(&self, guild_id: u64) -> Result<(), AppError> {
        let now = Utc::now();

        entity::prelude::GuildVoiceSettings::insert(entity::guild_voice_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            base_name_template: ActiveValue::Set(DEFAULT_BASE_NAME_TEMPLATE.to_string()),
            name_counter: ActiveValue::Set(0),
            max_channels: ActiveValue::Set(DEFAULT_MAX_CHANNELS),
            delete_delay: ActiveValue::Set(DEFAULT_DELETE_DELAY_SECONDS),
            log_channel_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_voice_settings::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the settings of a guild, creating the default row first if needed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildVoiceSettings)` - Existing or freshly created settings
    /// - `Err(AppError::DbErr)` - Database error during insert or query
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildVoiceSettings, AppError> {
        self.ensure_exists(guild_id).await?;

        let entity = entity::prelude::GuildVoiceSettings::find()
            .filter(entity::guild_voice_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("guild_voice_settings for {}", guild_id))
            })?;

        GuildVoiceSettings::from_entity(entity)
    }

    /// Sets the guild-wide fallback name template.
    ///
    /// No command exposes this.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn update_base_name_template(
        &self,
        guild_id: u64,
        template: &str,
    ) -> Result<GuildVoiceSettings, AppError> {
        self.update_column(
            guild_id,
            entity::guild_voice_settings::Column::BaseNameTemplate,
            Expr::value(template.to_string()),
        )
        .await
    }

    /// Sets how many generated channels the guild may have at once.
    pub async fn update_max_channels(
        &self,
        guild_id: u64,
        max_channels: i32,
    ) -> Result<GuildVoiceSettings, AppError> {
        self.update_column(
            guild_id,
            entity::guild_voice_settings::Column::MaxChannels,
            Expr::value(max_channels),
        )
        .await
    }

    /// Sets how long an empty generated channel survives, in seconds.
    pub async fn update_delete_delay(
        &self,
        guild_id: u64,
        seconds: i32,
    ) -> Result<GuildVoiceSettings, AppError> {
        self.update_column(
            guild_id,
            entity::guild_voice_settings::Column::DeleteDelay,
            Expr::value(seconds),
        )
        .await
    }

    /// Sets or clears the text channel receiving audit messages.
    pub async fn update_log_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<GuildVoiceSettings, AppError> {
        self.update_column(
            guild_id,
            entity::guild_voice_settings::Column::LogChannelId,
            Expr::value(channel_id.map(|id| id.to_string())),
        )
        .await
    }

    /// Upserts a single settings column.
    ///
    /// Ensures the row exists, writes the column together with `updated_at`, then
    /// returns the resulting settings.
    async fn update_column(
        &self,
        guild_id: u64,
        column: entity::guild_voice_settings::Column,
        value: SimpleExpr,
    ) -> Result<GuildVoiceSettings, AppError> {
        self.ensure_exists(guild_id).await?;

        entity::prelude::GuildVoiceSettings::update_many()
            .col_expr(column, value)
            .col_expr(
                entity::guild_voice_settings::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::guild_voice_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        self.get_or_create(guild_id).await
    }
}
