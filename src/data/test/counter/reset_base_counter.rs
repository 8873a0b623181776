use super::*;

/// Tests that a reset makes the next allocation return 1 again.
///
/// Expected: Ok(1) after the reset
#[tokio::test]
async fn next_allocation_after_reset_is_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("100")
        .name_counter(7)
        .build()
        .await?;

    let repo = CounterRepository::new(db);
    assert_eq!(repo.allocate_base_counter(100).await?, 7);

    repo.reset_base_counter(100).await?;

    assert_eq!(repo.allocate_base_counter(100).await?, 1);

    Ok(())
}

/// Tests that resetting one base leaves others alone.
///
/// Expected: the other base keeps counting
#[tokio::test]
async fn resets_only_target_base() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("100")
        .name_counter(5)
        .build()
        .await?;
    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("200")
        .name_counter(5)
        .build()
        .await?;

    let repo = CounterRepository::new(db);
    repo.reset_base_counter(100).await?;

    assert_eq!(repo.allocate_base_counter(100).await?, 1);
    assert_eq!(repo.allocate_base_counter(200).await?, 5);

    Ok(())
}
