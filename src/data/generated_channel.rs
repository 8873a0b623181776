//! Generated channel repository.
//!
//! A generated channel is active while `deleted_at` is null. Marking it deleted is
//! final; deleted rows stay behind as history and are never reactivated.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::voice_channel::{GeneratedChannel, RegisterGeneratedChannelParam},
    util::parse::parse_u64_from_string,
};

/// Repository providing database operations for generated clone channels.
pub struct GeneratedChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeneratedChannelRepository<'a> {
    /// Creates a new GeneratedChannelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GeneratedChannelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a freshly created clone as active.
    ///
    /// # Arguments
    /// - `param` - Clone, guild, base channel and creator IDs
    ///
    /// # Returns
    /// - `Ok(GeneratedChannel)` - The registered clone
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(
        &self,
        param: RegisterGeneratedChannelParam,
    ) -> Result<GeneratedChannel, AppError> {
        let entity = entity::generated_voice_channel::ActiveModel {
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            base_channel_id: ActiveValue::Set(param.base_channel_id.to_string()),
            creator_id: ActiveValue::Set(param.creator_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GeneratedChannel::from_entity(entity)
    }

    /// Checks whether the channel is a generated channel that has not been deleted.
    pub async fn is_active(&self, channel_id: u64) -> Result<bool, AppError> {
        let count = entity::prelude::GeneratedVoiceChannel::find()
            .filter(entity::generated_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::generated_voice_channel::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the active generated channels of a guild.
    pub async fn count_active_by_guild(&self, guild_id: u64) -> Result<u64, AppError> {
        let count = entity::prelude::GeneratedVoiceChannel::find()
            .filter(entity::generated_voice_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::generated_voice_channel::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts the active clones spawned from one base channel.
    pub async fn count_active_by_base(&self, base_channel_id: u64) -> Result<u64, AppError> {
        let count = entity::prelude::GeneratedVoiceChannel::find()
            .filter(
                entity::generated_voice_channel::Column::BaseChannelId
                    .eq(base_channel_id.to_string()),
            )
            .filter(entity::generated_voice_channel::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Marks a generated channel as deleted.
    ///
    /// Only rows that are still active are touched, so the original deletion time
    /// of a history row is preserved.
    ///
    /// # Returns
    /// - `Ok(true)` - An active row was marked deleted
    /// - `Ok(false)` - The channel is unknown or already deleted
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_deleted(&self, channel_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::GeneratedVoiceChannel::update_many()
            .col_expr(
                entity::generated_voice_channel::Column::DeletedAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::generated_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::generated_voice_channel::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the base channel a generated channel was cloned from.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn get_base_channel_id(&self, channel_id: u64) -> Result<Option<u64>, AppError> {
        let entity = entity::prelude::GeneratedVoiceChannel::find()
            .filter(entity::generated_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        entity
            .map(|generated| parse_u64_from_string(generated.base_channel_id))
            .transpose()
    }

    /// Finds a generated channel, active or deleted, by its Discord channel ID.
    pub async fn find_by_channel_id(
        &self,
        channel_id: u64,
    ) -> Result<Option<GeneratedChannel>, AppError> {
        let entity = entity::prelude::GeneratedVoiceChannel::find()
            .filter(entity::generated_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(GeneratedChannel::from_entity).transpose()
    }
}
