use super::*;

/// Tests counting active clones per guild.
///
/// Verifies deleted clones and clones of other guilds are excluded.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_active_by_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = create_base_channel(db, "1").await?;
    let other_guild_base = create_base_channel(db, "2").await?;

    create_generated_channel(db, &base).await?;
    create_generated_channel(db, &base).await?;
    create_generated_channel(db, &other_guild_base).await?;
    GeneratedVoiceChannelFactory::new(db, &base)
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = GeneratedChannelRepository::new(db);

    assert_eq!(repo.count_active_by_guild(1).await?, 2);
    assert_eq!(repo.count_active_by_guild(2).await?, 1);
    assert_eq!(repo.count_active_by_guild(3).await?, 0);

    Ok(())
}

/// Tests counting active clones per base channel.
///
/// Expected: Ok with counts scoped to each base
#[tokio::test]
async fn counts_active_by_base() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = BaseVoiceChannelFactory::new(db, "1")
        .channel_id("10")
        .build()
        .await?;
    let second = BaseVoiceChannelFactory::new(db, "1")
        .channel_id("20")
        .build()
        .await?;

    create_generated_channel(db, &first).await?;
    create_generated_channel(db, &first).await?;
    create_generated_channel(db, &second).await?;
    GeneratedVoiceChannelFactory::new(db, &second)
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = GeneratedChannelRepository::new(db);

    assert_eq!(repo.count_active_by_base(10).await?, 2);
    assert_eq!(repo.count_active_by_base(20).await?, 1);

    Ok(())
}

/// Tests both counts for a guild with settings and a single base channel.
///
/// Expected: Ok(1) for the guild and for its base
#[tokio::test]
async fn counts_single_clone_in_both_scopes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, base) = create_guild_with_base_channel(db).await?;
    create_generated_channel(db, &base).await?;

    let guild_id: u64 = settings.guild_id.parse().unwrap();
    let base_channel_id: u64 = base.channel_id.parse().unwrap();
    let repo = GeneratedChannelRepository::new(db);

    assert_eq!(repo.count_active_by_guild(guild_id).await?, 1);
    assert_eq!(repo.count_active_by_base(base_channel_id).await?, 1);

    Ok(())
}
