use super::*;

#[tokio::test]
async fn stores_and_finds_by_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let expires_at = Utc::now() + Duration::days(30);

    let repo = RefreshTokenRepository::new(db);
    let token = repo
        .insert(user.id, "hash-one".to_string(), expires_at)
        .await?;

    assert_eq!(token.user_id, user.id);
    assert!(token.revoked_at.is_none());

    let found = repo.find_by_hash("hash-one").await?;
    assert_eq!(found.map(|t| t.id), Some(token.id));

    assert!(repo.find_by_hash("unknown-hash").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_hashes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let expires_at = Utc::now() + Duration::days(30);

    let repo = RefreshTokenRepository::new(db);
    repo.insert(user.id, "same-hash".to_string(), expires_at)
        .await?;

    let result = repo
        .insert(user.id, "same-hash".to_string(), expires_at)
        .await;

    assert!(result.is_err());

    Ok(())
}
