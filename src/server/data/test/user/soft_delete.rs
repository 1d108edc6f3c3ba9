use super::*;

#[tokio::test]
async fn hides_account_and_reserves_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.soft_delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(repo.find_credentials_by_email(&user.email).await?.is_none());
    // The address stays reserved for conflict checks.
    assert!(repo.email_taken(&user.email).await?);

    Ok(())
}

/// Deletion bumps the token version so outstanding tokens die with the
/// account.
#[tokio::test]
async fn bumps_token_version_on_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).token_version(2).build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.soft_delete(user.id).await?);

    let row = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.token_version, 3);
    assert!(row.deleted_at.is_some());

    Ok(())
}

#[tokio::test]
async fn deleting_twice_reports_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.soft_delete(user.id).await?);
    assert!(!repo.soft_delete(user.id).await?);

    Ok(())
}
