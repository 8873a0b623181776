use super::*;
use sea_orm::DbErr;

/// Tests sequential allocations on a fresh base channel.
///
/// Expected: Ok(1), Ok(2), Ok(3)
#[tokio::test]
async fn starts_at_one_for_new_base() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("100")
        .build()
        .await?;

    let repo = CounterRepository::new(db);

    assert_eq!(repo.allocate_base_counter(100).await?, 1);
    assert_eq!(repo.allocate_base_counter(100).await?, 2);
    assert_eq!(repo.allocate_base_counter(100).await?, 3);

    Ok(())
}

/// Tests allocating for a channel that was never registered.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unregistered_base() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    let result = repo.allocate_base_counter(404).await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(DbErr::RecordNotFound(_)))
    ));

    Ok(())
}

/// Tests concurrent allocations on one base channel.
///
/// Expected: every caller receives a distinct value
#[tokio::test]
async fn concurrent_allocations_are_distinct() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("100")
        .build()
        .await?;

    let repo = CounterRepository::new(db);
    let (a, b, c) = tokio::join!(
        repo.allocate_base_counter(100),
        repo.allocate_base_counter(100),
        repo.allocate_base_counter(100),
    );

    let mut values = vec![a?, b?, c?];
    values.sort();

    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}
