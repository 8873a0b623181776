//! Clones spawned from a base channel when a member joins it.
//!
//! `base_channel_id` is a soft reference to `base_voice_channel.channel_id`;
//! there is no foreign key so orphaned history rows are allowed.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "generated_voice_channel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub channel_id: String,
    pub guild_id: String,
    pub base_channel_id: String,
    pub creator_id: String,
    pub created_at: DateTimeUtc,
    /// Set once the channel is gone; never cleared afterwards.
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
