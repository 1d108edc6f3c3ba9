use super::*;

#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .kind(RoomKind::Single)
        .price_per_night(Decimal::new(80, 0))
        .max_guests(1)
        .description(Some("Ground floor".to_string()))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(
            room.id,
            UpdateRoomParam {
                price_per_night: Some(Decimal::new(95, 0)),
                amenities: Some(AmenitySet::from_tags(["wifi"])),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price_per_night, Decimal::new(95, 0));
    assert_eq!(updated.amenities, r#"["wifi"]"#);
    // Untouched fields keep their values.
    assert_eq!(updated.kind, RoomKind::Single);
    assert_eq!(updated.max_guests, 1);
    assert_eq!(updated.description, Some("Ground floor".to_string()));

    Ok(())
}

#[tokio::test]
async fn clearing_description_is_distinct_from_omitting_it() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .description(Some("Sea view".to_string()))
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let untouched = repo
        .update(room.id, UpdateRoomParam::default())
        .await?
        .unwrap();
    assert_eq!(untouched.description, Some("Sea view".to_string()));

    let cleared = repo
        .update(
            room.id,
            UpdateRoomParam {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(cleared.description, None);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_or_deleted_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::room::RoomFactory::new(db)
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo.update(999, UpdateRoomParam::default()).await?.is_none());
    assert!(repo
        .update(deleted.id, UpdateRoomParam::default())
        .await?
        .is_none());

    Ok(())
}
