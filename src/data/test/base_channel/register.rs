use super::*;

/// Tests registering a new base channel.
///
/// Verifies the row starts with counter 1 and no template override.
///
/// Expected: Ok(BaseChannel) that is then recognised as a base channel
#[tokio::test]
async fn registers_base_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BaseChannelRepository::new(db);
    let base = repo
        .register(RegisterBaseChannelParam {
            channel_id: 100,
            guild_id: 1,
            creator_id: Some(50),
        })
        .await?;

    assert_eq!(base.channel_id, 100);
    assert_eq!(base.guild_id, 1);
    assert_eq!(base.creator_id, Some(50));
    assert_eq!(base.name_counter, 1);
    assert_eq!(base.name_template, None);

    assert!(repo.is_base_channel(100).await?);
    assert!(!repo.is_base_channel(101).await?);

    Ok(())
}

/// Tests that a channel cannot be registered twice.
///
/// Expected: Err on the second registration
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BaseChannelRepository::new(db);
    let param = RegisterBaseChannelParam {
        channel_id: 100,
        guild_id: 1,
        creator_id: None,
    };
    repo.register(param.clone()).await?;

    let result = repo.register(param).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests looking up a registered base channel.
///
/// Expected: Ok(Some) for the registered channel, Ok(None) otherwise
#[tokio::test]
async fn finds_by_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("200")
        .name_counter(4)
        .build()
        .await?;

    let repo = BaseChannelRepository::new(db);
    let found = repo.find_by_channel_id(200).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().name_counter, 4);
    assert!(repo.find_by_channel_id(201).await?.is_none());

    Ok(())
}
