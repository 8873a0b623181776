use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BaseVoiceChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(BaseVoiceChannel::Id))
                    .col(string_uniq(BaseVoiceChannel::ChannelId))
                    .col(string(BaseVoiceChannel::GuildId))
                    .col(string_null(BaseVoiceChannel::CreatorId))
                    .col(string_null(BaseVoiceChannel::NameTemplate))
                    .col(big_integer(BaseVoiceChannel::NameCounter).default(1))
                    .col(timestamp(BaseVoiceChannel::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_base_voice_channel_guild_id")
                    .table(BaseVoiceChannel::Table)
                    .col(BaseVoiceChannel::GuildId)
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
                    .name("idx_base_voice_channel_guild_id")
                    .table(BaseVoiceChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BaseVoiceChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BaseVoiceChannel {
    Table,
    Id,
    ChannelId,
    GuildId,
    CreatorId,
    NameTemplate,
    NameCounter,
    CreatedAt,
}
