use super::*;

/// Tests sequential allocations on a fresh guild.
///
/// Verifies the missing settings row is created and values start at 0.
///
/// Expected: Ok(0), Ok(1), ..., Ok(4)
#[tokio::test]
async fn starts_at_zero_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);

    let mut values = Vec::new();
    for _ in 0..5 {
        values.push(repo.allocate_guild_counter(1).await?);
    }

    assert_eq!(values, vec![0, 1, 2, 3, 4]);

    let settings = GuildVoiceSettingsRepository::new(db).get_or_create(1).await?;
    assert_eq!(settings.name_counter, 5);

    Ok(())
}

/// Tests that guild counters are independent.
///
/// Expected: Ok(0) for each guild's first allocation
#[tokio::test]
async fn counts_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.allocate_guild_counter(1).await?;
    repo.allocate_guild_counter(1).await?;

    assert_eq!(repo.allocate_guild_counter(2).await?, 0);
    assert_eq!(repo.allocate_guild_counter(1).await?, 2);

    Ok(())
}

/// Tests concurrent allocations on one guild.
///
/// Expected: every caller receives a distinct value
#[tokio::test]
async fn concurrent_allocations_are_distinct() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    let (a, b, c, d) = tokio::join!(
        repo.allocate_guild_counter(9),
        repo.allocate_guild_counter(9),
        repo.allocate_guild_counter(9),
        repo.allocate_guild_counter(9),
    );

    let mut values = vec![a?, b?, c?, d?];
    values.sort();

    assert_eq!(values, vec![0, 1, 2, 3]);

    Ok(())
}
