use super::*;

#[tokio::test]
async fn creates_and_finds_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomTypeRepository::new(db);
    let entry = repo
        .create(CreateRoomTypeParam {
            kind: RoomKind::Deluxe,
            description: Some("Top floor".to_string()),
            base_price: Decimal::new(300, 0),
            default_max_guests: 3,
        })
        .await?;

    assert_eq!(entry.kind, RoomKind::Deluxe);

    let found = repo.find_by_kind(RoomKind::Deluxe).await?;
    assert_eq!(found.map(|e| e.id), Some(entry.id));

    assert!(repo.find_by_kind(RoomKind::Single).await?.is_none());

    Ok(())
}

/// One catalog entry per kind, enforced by the unique index.
#[tokio::test]
async fn fails_for_duplicate_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, RoomKind::Single).await?;

    let repo = RoomTypeRepository::new(db);
    let result = repo
        .create(CreateRoomTypeParam {
            kind: RoomKind::Single,
            description: None,
            base_price: Decimal::new(50, 0),
            default_max_guests: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn lists_all_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let single = factory::room_type::create_room_type(db, RoomKind::Single).await?;
    let suite = factory::room_type::create_room_type(db, RoomKind::Suite).await?;

    let repo = RoomTypeRepository::new(db);
    let all = repo.get_all().await?;

    let ids: Vec<i32> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![single.id, suite.id]);

    Ok(())
}
