use super::*;

#[tokio::test]
async fn marks_room_deleted_and_hides_it() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);

    assert!(repo.soft_delete(room.id).await?);
    assert!(repo.get_by_id(room.id).await?.is_none());
    assert!(repo
        .search_available(&criteria(march(1), march(28)))
        .await?
        .is_empty());

    // The row itself survives.
    let retained = repo.get_by_id_with_deleted(room.id).await?;
    assert!(retained.is_some());
    assert!(retained.and_then(|r| r.deleted_at).is_some());

    Ok(())
}

#[tokio::test]
async fn deleting_twice_reports_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);

    assert!(repo.soft_delete(room.id).await?);
    assert!(!repo.soft_delete(room.id).await?);

    Ok(())
}
