use super::*;

#[tokio::test]
async fn creates_room_with_canonical_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParam {
            room_number: "301".to_string(),
            kind: RoomKind::Suite,
            price_per_night: Decimal::new(220, 0),
            max_guests: 4,
            description: Some("Corner suite".to_string()),
            amenities: AmenitySet::from_tags(["wifi", "minibar"]),
        })
        .await?;

    assert_eq!(room.room_number, "301");
    assert_eq!(room.kind, RoomKind::Suite);
    assert_eq!(room.status, RoomStatus::Available);
    assert_eq!(room.amenities, r#"["minibar","wifi"]"#);
    assert!(room.deleted_at.is_none());

    Ok(())
}

/// The unique index rejects a second room with the same number.
#[tokio::test]
async fn fails_for_duplicate_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db).room_number("101").build().await?;

    let repo = RoomRepository::new(db);
    let result = repo
        .create(CreateRoomParam {
            room_number: "101".to_string(),
            kind: RoomKind::Double,
            price_per_night: Decimal::new(100, 0),
            max_guests: 2,
            description: None,
            amenities: AmenitySet::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// `find_by_number` sees soft-deleted rooms too; their number stays
/// reserved.
#[tokio::test]
async fn find_by_number_includes_soft_deleted_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_number("404")
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let found = repo.find_by_number("404").await?;

    assert_eq!(found.map(|r| r.id), Some(room.id));

    Ok(())
}
