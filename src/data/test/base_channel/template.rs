use super::*;

/// Tests setting and reading a template override.
///
/// Expected: Ok(true) from the setter and the template from the getter
#[tokio::test]
async fn sets_and_gets_template() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BaseVoiceChannelFactory::new(db, "1")
        .channel_id("300")
        .build()
        .await?;

    let repo = BaseChannelRepository::new(db);
    assert_eq!(repo.get_template(300).await?, None);

    let updated = repo.set_template(300, "{user_name} #{count}").await?;

    assert!(updated);
    assert_eq!(
        repo.get_template(300).await?,
        Some("{user_name} #{count}".to_string())
    );

    Ok(())
}

/// Tests setting a template on a channel that is not a base channel.
///
/// Expected: Ok(false) and nothing stored
#[tokio::test]
async fn ignores_unknown_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BaseChannelRepository::new(db);
    let updated = repo.set_template(404, "anything").await?;

    assert!(!updated);
    assert_eq!(repo.get_template(404).await?, None);

    Ok(())
}
