pub use sea_orm_migration::prelude::*;

pub mod m20260110_000001_create_guild_voice_settings_table;
mod m20260110_000002_create_base_voice_channel_table;
mod m20260110_000003_create_generated_voice_channel_table;
pub mod m20260112_000004_add_guild_voice_settings_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_guild_voice_settings_table::Migration),
            Box::new(m20260110_000002_create_base_voice_channel_table::Migration),
            Box::new(m20260110_000003_create_generated_voice_channel_table::Migration),
            Box::new(m20260112_000004_add_guild_voice_settings_columns::Migration),
        ]
    }
}
