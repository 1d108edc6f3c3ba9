use super::*;

#[tokio::test]
async fn sets_the_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, room.id, user.id)
        .status(BookingStatus::Pending)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert!(updated.updated_at >= booking.updated_at);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo
        .update_status(999, BookingStatus::Confirmed)
        .await?
        .is_none());

    Ok(())
}
