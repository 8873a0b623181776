use super::*;

/// Tests that updating an unknown guild creates its row first.
///
/// Expected: Ok with the new value and defaults for everything else
#[tokio::test]
async fn upserts_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildVoiceSettingsRepository::new(db);
    let settings = repo.update_delete_delay(555, 90).await?;

    assert_eq!(settings.delete_delay_seconds, 90);
    assert_eq!(settings.max_channels, DEFAULT_MAX_CHANNELS);
    assert_eq!(settings.base_name_template, DEFAULT_BASE_NAME_TEMPLATE);

    Ok(())
}

/// Tests each setter writes only its own column.
///
/// Expected: Ok with all four values applied
#[tokio::test]
async fn updates_each_column() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildVoiceSettingsRepository::new(db);
    repo.update_base_name_template(7, "Room {count}").await?;
    repo.update_max_channels(7, 12).await?;
    repo.update_delete_delay(7, 60).await?;
    let settings = repo.update_log_channel(7, Some(999)).await?;

    assert_eq!(settings.base_name_template, "Room {count}");
    assert_eq!(settings.max_channels, 12);
    assert_eq!(settings.delete_delay_seconds, 60);
    assert_eq!(settings.log_channel_id, Some(999));
    assert_eq!(settings.name_counter, 0);

    Ok(())
}

/// Tests clearing the log channel.
///
/// Expected: Ok with `log_channel_id` set back to None
#[tokio::test]
async fn clears_log_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildVoiceSettingsRepository::new(db);
    repo.update_log_channel(7, Some(999)).await?;
    let settings = repo.update_log_channel(7, None).await?;

    assert_eq!(settings.log_channel_id, None);

    Ok(())
}
