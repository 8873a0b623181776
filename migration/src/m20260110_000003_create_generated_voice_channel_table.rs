use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to base_voice_channel: history rows may outlive their base
        manager
            .create_table(
                Table::create()
                    .table(GeneratedVoiceChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(GeneratedVoiceChannel::Id))
                    .col(string_uniq(GeneratedVoiceChannel::ChannelId))
                    .col(string(GeneratedVoiceChannel::GuildId))
                    .col(string(GeneratedVoiceChannel::BaseChannelId))
                    .col(string(GeneratedVoiceChannel::CreatorId))
                    .col(timestamp(GeneratedVoiceChannel::CreatedAt))
                    .col(timestamp_null(GeneratedVoiceChannel::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_generated_voice_channel_guild_deleted")
                    .table(GeneratedVoiceChannel::Table)
                    .col(GeneratedVoiceChannel::GuildId)
                    .col(GeneratedVoiceChannel::DeletedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_generated_voice_channel_base")
                    .table(GeneratedVoiceChannel::Table)
                    .col(GeneratedVoiceChannel::BaseChannelId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_generated_voice_channel_base")
                    .table(GeneratedVoiceChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_generated_voice_channel_guild_deleted")
                    .table(GeneratedVoiceChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GeneratedVoiceChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GeneratedVoiceChannel {
    Table,
    Id,
    ChannelId,
    GuildId,
    BaseChannelId,
    CreatorId,
    CreatedAt,
    DeletedAt,
}
