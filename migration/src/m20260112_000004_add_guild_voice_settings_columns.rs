//! Adds the deletion delay and log channel columns to guild settings.
//!
//! Safe to apply more than once: each column is only added when it is missing,
//! and the backfill only fills rows whose value is still NULL.

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_guild_voice_settings_table::GuildVoiceSettings;

const TABLE: &str = "guild_voice_settings";

/// Default number of seconds before an empty generated channel is deleted.
pub const DEFAULT_DELETE_DELAY: i32 = 30;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_column(TABLE, "delete_delay").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(GuildVoiceSettings::Table)
                        .add_column(
                            integer(GuildVoiceSettings::DeleteDelay).default(DEFAULT_DELETE_DELAY),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column(TABLE, "log_channel_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(GuildVoiceSettings::Table)
                        .add_column(string_null(GuildVoiceSettings::LogChannelId))
                        .to_owned(),
                )
                .await?;
        }

        let backfill = Query::update()
            .table(GuildVoiceSettings::Table)
            .value(GuildVoiceSettings::DeleteDelay, DEFAULT_DELETE_DELAY)
            .and_where(Expr::col(GuildVoiceSettings::DeleteDelay).is_null())
            .to_owned();
        manager.get_connection().execute(&backfill).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column(TABLE, "log_channel_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(GuildVoiceSettings::Table)
                        .drop_column(GuildVoiceSettings::LogChannelId)
                        .to_owned(),
                )
                .await?;
        }

        if manager.has_column(TABLE, "delete_delay").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(GuildVoiceSettings::Table)
                        .drop_column(GuildVoiceSettings::DeleteDelay)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
