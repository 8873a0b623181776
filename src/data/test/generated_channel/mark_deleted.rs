use super::*;

/// Tests marking an active clone deleted.
///
/// Expected: Ok(true) and the clone no longer counts as active
#[tokio::test]
async fn marks_active_clone_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = create_base_channel(db, "1").await?;
    let generated = GeneratedVoiceChannelFactory::new(db, &base)
        .channel_id("700")
        .build()
        .await?;

    let repo = GeneratedChannelRepository::new(db);
    let marked = repo.mark_deleted(700).await?;

    assert!(marked);
    assert!(!repo.is_active(700).await?);

    let stored = repo.find_by_channel_id(700).await?.unwrap();
    assert!(stored.deleted_at.is_some());
    assert_eq!(stored.base_channel_id.to_string(), generated.base_channel_id);

    Ok(())
}

/// Tests that history rows are never rewritten.
///
/// Verifies a second mark leaves the original deletion time in place.
///
/// Expected: Ok(false) and unchanged `deleted_at`
#[tokio::test]
async fn keeps_original_deletion_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = create_base_channel(db, "1").await?;
    let deleted_at = Utc::now() - chrono::Duration::hours(1);
    GeneratedVoiceChannelFactory::new(db, &base)
        .channel_id("701")
        .deleted_at(Some(deleted_at))
        .build()
        .await?;

    let repo = GeneratedChannelRepository::new(db);
    let marked = repo.mark_deleted(701).await?;

    assert!(!marked);
    let stored = repo.find_by_channel_id(701).await?.unwrap();
    assert_eq!(
        stored.deleted_at.map(|at| at.timestamp()),
        Some(deleted_at.timestamp())
    );

    Ok(())
}

/// Tests marking an unknown channel.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_unknown_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GeneratedChannelRepository::new(db);

    assert!(!repo.mark_deleted(12345).await?);

    Ok(())
}
