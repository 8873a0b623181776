//! Per-guild voice feature configuration.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_voice_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    /// Fallback template for channels that have no override.
    pub base_name_template: String,
    /// Guild-wide counter, next value to hand out (starts at 0).
    pub name_counter: i64,
    pub max_channels: i32,
    /// Seconds an empty generated channel survives before deletion.
    pub delete_delay: i32,
    pub log_channel_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
