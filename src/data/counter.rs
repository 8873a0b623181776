//! Name counter allocation.
//!
//! Counters are incremented and read inside one transaction, so the row stays
//! write-locked between the increment and the read and concurrent callers never
//! observe the same value. The guild counter starts at 0, the per-base counter at 1.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::{data::guild_voice_settings::GuildVoiceSettingsRepository, error::AppError};

/// Repository handing out name counter values.
pub struct CounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CounterRepository<'a> {
    /// Creates a new CounterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CounterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Allocates the next guild-wide counter value.
    ///
    /// Creates the guild settings row first if it is missing, so the first
    /// allocation of a fresh guild returns 0.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(i64)` - The allocated value
    /// - `Err(AppError::DbErr)` - Database error during the transaction
    pub async fn allocate_guild_counter(&self, guild_id: u64) -> Result<i64, AppError> {
        GuildVoiceSettingsRepository::new(self.db)
            .ensure_exists(guild_id)
            .await?;

        let txn = self.db.begin().await?;

        entity::prelude::GuildVoiceSettings::update_many()
            .col_expr(
                entity::guild_voice_settings::Column::NameCounter,
                Expr::col(entity::guild_voice_settings::Column::NameCounter).add(1),
            )
            .filter(entity::guild_voice_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(&txn)
            .await?;

        let settings = entity::prelude::GuildVoiceSettings::find()
            .filter(entity::guild_voice_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("guild_voice_settings for {}", guild_id))
            })?;

        txn.commit().await?;

        Ok(settings.name_counter - 1)
    }

    /// Allocates the next counter value of a base channel.
    ///
    /// # Arguments
    /// - `base_channel_id` - Discord channel ID of a registered base channel
    ///
    /// # Returns
    /// - `Ok(i64)` - The allocated value, 1 for the first clone
    /// - `Err(AppError::DbErr(RecordNotFound))` - The channel is not a base channel
    /// - `Err(AppError::DbErr)` - Database error during the transaction
    pub async fn allocate_base_counter(&self, base_channel_id: u64) -> Result<i64, AppError> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::BaseVoiceChannel::update_many()
            .col_expr(
                entity::base_voice_channel::Column::NameCounter,
                Expr::col(entity::base_voice_channel::Column::NameCounter).add(1),
            )
            .filter(entity::base_voice_channel::Column::ChannelId.eq(base_channel_id.to_string()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound(format!(
                "base_voice_channel {}",
                base_channel_id
            ))
            .into());
        }

        let base = entity::prelude::BaseVoiceChannel::find()
            .filter(entity::base_voice_channel::Column::ChannelId.eq(base_channel_id.to_string()))
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("base_voice_channel {}", base_channel_id)))?;

        txn.commit().await?;

        Ok(base.name_counter - 1)
    }

    /// Resets the counter of a base channel so its next clone is numbered 1 again.
    ///
    /// Resetting an unknown channel is a no-op.
    pub async fn reset_base_counter(&self, base_channel_id: u64) -> Result<(), AppError> {
        entity::prelude::BaseVoiceChannel::update_many()
            .col_expr(entity::base_voice_channel::Column::NameCounter, Expr::value(1i64))
            .filter(entity::base_voice_channel::Column::ChannelId.eq(base_channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
