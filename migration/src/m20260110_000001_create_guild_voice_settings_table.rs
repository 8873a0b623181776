use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // delete_delay and log_channel_id are added by a later upgrade step
        manager
            .create_table(
                Table::create()
                    .table(GuildVoiceSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildVoiceSettings::Id))
                    .col(string_uniq(GuildVoiceSettings::GuildId))
                    .col(
                        string(GuildVoiceSettings::BaseNameTemplate)
                            .default("{user_name}'s channel"),
                    )
                    .col(big_integer(GuildVoiceSettings::NameCounter).default(0))
                    .col(integer(GuildVoiceSettings::MaxChannels).default(50))
                    .col(timestamp(GuildVoiceSettings::CreatedAt))
                    .col(timestamp(GuildVoiceSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildVoiceSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildVoiceSettings {
    Table,
    Id,
    GuildId,
    BaseNameTemplate,
    NameCounter,
    MaxChannels,
    DeleteDelay,
    LogChannelId,
    CreatedAt,
    UpdatedAt,
}
