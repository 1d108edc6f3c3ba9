use super::*;

#[tokio::test]
async fn purges_expired_and_revoked_tokens_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let repo = RefreshTokenRepository::new(db);
    repo.insert(user.id, "expired".to_string(), now - Duration::days(1))
        .await?;
    let revoked = repo
        .insert(user.id, "revoked".to_string(), now + Duration::days(30))
        .await?;
    repo.revoke(revoked.id).await?;
    repo.insert(user.id, "live".to_string(), now + Duration::days(30))
        .await?;

    let purged = repo.purge_dead(now).await?;

    assert_eq!(purged, 2);
    assert!(repo.find_by_hash("expired").await?.is_none());
    assert!(repo.find_by_hash("revoked").await?.is_none());
    assert!(repo.find_by_hash("live").await?.is_some());

    Ok(())
}
