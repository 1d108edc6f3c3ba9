use super::*;

#[tokio::test]
async fn changes_the_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, UserRole::Staff).await?.unwrap();

    assert_eq!(updated.role, UserRole::Staff);

    Ok(())
}

#[tokio::test]
async fn bump_token_version_increments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let bumped = repo.bump_token_version(user.id).await?.unwrap();
    assert_eq!(bumped.token_version, 1);

    let bumped = repo.bump_token_version(user.id).await?.unwrap();
    assert_eq!(bumped.token_version, 2);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.set_role(999, UserRole::Admin).await?.is_none());
    assert!(repo.bump_token_version(999).await?.is_none());

    Ok(())
}
