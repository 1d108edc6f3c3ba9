use super::*;

#[tokio::test]
async fn reflects_presence_of_a_live_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    factory::user::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    let admin = factory::user::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    // A soft-deleted admin no longer counts.
    repo.soft_delete(admin.id).await?;
    assert!(!repo.admin_exists().await?);

    Ok(())
}
