//! Base channel repository.
//!
//! A channel only counts as a base channel once it has been registered here by the
//! create command. Rows are never removed automatically.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::voice_channel::{BaseChannel, RegisterBaseChannelParam},
};

/// Repository providing database operations for registered base channels.
pub struct BaseChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BaseChannelRepository<'a> {
    /// Creates a new BaseChannelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BaseChannelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a newly created voice channel as a base channel.
    ///
    /// The per-base counter starts at 1 and no template override is set.
    ///
    /// # Arguments
    /// - `param` - Channel, guild and creator IDs
    ///
    /// # Returns
    /// - `Ok(BaseChannel)` - The registered base channel
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate channel ID
    pub async fn register(&self, param: RegisterBaseChannelParam) -> Result<BaseChannel, AppError> {
        let entity = entity::base_voice_channel::ActiveModel {
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            creator_id: ActiveValue::Set(param.creator_id.map(|id| id.to_string())),
            name_template: ActiveValue::Set(None),
            name_counter: ActiveValue::Set(1),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BaseChannel::from_entity(entity)
    }

    /// Checks whether the channel was registered as a base channel.
    pub async fn is_base_channel(&self, channel_id: u64) -> Result<bool, AppError> {
        let count = entity::prelude::BaseVoiceChannel::find()
            .filter(entity::base_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a base channel by its Discord channel ID.
    ///
    /// # Returns
    /// - `Ok(Some(BaseChannel))` - The channel is a registered base channel
    /// - `Ok(None)` - The channel is not registered
    /// - `Err(AppError)` - Database error or malformed stored ID
    pub async fn find_by_channel_id(
        &self,
        channel_id: u64,
    ) -> Result<Option<BaseChannel>, AppError> {
        let entity = entity::prelude::BaseVoiceChannel::find()
            .filter(entity::base_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(BaseChannel::from_entity).transpose()
    }

    /// Sets the clone name template override of a base channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The template was stored
    /// - `Ok(false)` - No base channel with this ID exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_template(&self, channel_id: u64, template: &str) -> Result<bool, AppError> {
        let result = entity::prelude::BaseVoiceChannel::update_many()
            .col_expr(
                entity::base_voice_channel::Column::NameTemplate,
                Expr::value(Some(template.to_string())),
            )
            .filter(entity::base_voice_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the clone name template override of a base channel, if any.
    pub async fn get_template(&self, channel_id: u64) -> Result<Option<String>, AppError> {
        Ok(self
            .find_by_channel_id(channel_id)
            .await?
            .and_then(|base| base.name_template))
    }
}
