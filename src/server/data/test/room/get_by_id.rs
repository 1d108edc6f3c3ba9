use super::*;

#[tokio::test]
async fn returns_live_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    let found = repo.get_by_id(room.id).await?;

    assert_eq!(found.map(|r| r.id), Some(room.id));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}

/// Soft-deleted rooms are invisible to `get_by_id` but reachable through
/// `get_by_id_with_deleted` for historical joins.
#[tokio::test]
async fn soft_deleted_room_is_absent_unless_asked_for() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo.get_by_id(room.id).await?.is_none());
    assert!(repo.get_by_id_with_deleted(room.id).await?.is_some());

    Ok(())
}
