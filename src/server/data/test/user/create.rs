use super::*;

#[tokio::test]
async fn creates_account_without_exposing_the_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: UserRole::Guest,
        })
        .await?;

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::Guest);
    assert_eq!(user.token_version, 0);

    // The credential row is only reachable through the dedicated lookup.
    let credentials = repo
        .find_credentials_by_email("alice@example.com")
        .await?
        .unwrap();
    assert_eq!(credentials.password_hash, "$argon2id$fake");

    Ok(())
}

#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: existing.email.clone(),
            name: "Impostor".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: UserRole::Guest,
        })
        .await;

    assert!(result.is_err());
    assert!(repo.email_taken(&existing.email).await?);

    Ok(())
}

#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);

    Ok(())
}
