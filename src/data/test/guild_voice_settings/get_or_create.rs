use super::*;

/// Tests lazily creating settings for an unknown guild.
///
/// Verifies that the first access inserts a row carrying every default.
///
/// Expected: Ok with default settings and exactly one row
#[tokio::test]
async fn creates_defaults_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildVoiceSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    assert_eq!(settings.guild_id, 123456789);
    assert_eq!(settings.base_name_template, DEFAULT_BASE_NAME_TEMPLATE);
    assert_eq!(settings.name_counter, 0);
    assert_eq!(settings.max_channels, DEFAULT_MAX_CHANNELS);
    assert_eq!(settings.delete_delay_seconds, DEFAULT_DELETE_DELAY_SECONDS);
    assert_eq!(settings.log_channel_id, None);

    let count = entity::prelude::GuildVoiceSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests reading settings that already exist.
///
/// Verifies that configured values are returned untouched and no second row is
/// inserted.
///
/// Expected: Ok with the stored values
#[tokio::test]
async fn returns_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GuildVoiceSettingsFactory::new(db)
        .guild_id("42")
        .max_channels(3)
        .delete_delay(120)
        .log_channel_id(Some("77".to_string()))
        .build()
        .await?;

    let repo = GuildVoiceSettingsRepository::new(db);
    let first = repo.get_or_create(42).await?;
    let second = repo.get_or_create(42).await?;

    assert_eq!(first.max_channels, 3);
    assert_eq!(first.delete_delay_seconds, 120);
    assert_eq!(first.log_channel_id, Some(77));
    assert_eq!(first, second);

    let count = entity::prelude::GuildVoiceSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that settings are isolated per guild.
///
/// Expected: Ok with one row per guild
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildVoiceSettingsRepository::new(db);
    repo.update_max_channels(1, 5).await?;
    let other = repo.get_or_create(2).await?;

    assert_eq!(other.max_channels, DEFAULT_MAX_CHANNELS);

    let count = entity::prelude::GuildVoiceSettings::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
