use super::*;

/// Tests registering a clone.
///
/// Expected: Ok(GeneratedChannel) that is active and linked to its base
#[tokio::test]
async fn registers_active_clone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GeneratedChannelRepository::new(db);
    let generated = repo
        .register(RegisterGeneratedChannelParam {
            channel_id: 900,
            guild_id: 1,
            base_channel_id: 100,
            creator_id: 50,
        })
        .await?;

    assert_eq!(generated.channel_id, 900);
    assert_eq!(generated.base_channel_id, 100);
    assert_eq!(generated.creator_id, 50);
    assert!(generated.is_active());

    assert!(repo.is_active(900).await?);
    assert_eq!(repo.get_base_channel_id(900).await?, Some(100));
    assert_eq!(repo.find_by_channel_id(900).await?, Some(generated));

    Ok(())
}

/// Tests looking up channels that were never generated.
///
/// Expected: Ok(false) / Ok(None) for every query
#[tokio::test]
async fn unknown_channel_is_not_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GeneratedChannelRepository::new(db);

    assert!(!repo.is_active(1).await?);
    assert_eq!(repo.get_base_channel_id(1).await?, None);
    assert!(repo.find_by_channel_id(1).await?.is_none());

    Ok(())
}
