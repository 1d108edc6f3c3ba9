use super::*;

#[tokio::test]
async fn completes_confirmed_bookings_past_checkout() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let now = Utc::now();

    let past_confirmed = factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(now - Duration::days(5), now - Duration::days(2))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let past_pending = factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(now - Duration::days(10), now - Duration::days(8))
        .status(BookingStatus::Pending)
        .build()
        .await?;
    let ongoing = factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(now - Duration::days(1), now + Duration::days(1))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let closed = repo.complete_past(now).await?;

    assert_eq!(closed, 1);

    assert_eq!(
        repo.get_by_id(past_confirmed.id).await?.unwrap().status,
        BookingStatus::Completed
    );
    // Pending bookings are not silently completed, and ongoing stays are
    // untouched.
    assert_eq!(
        repo.get_by_id(past_pending.id).await?.unwrap().status,
        BookingStatus::Pending
    );
    assert_eq!(
        repo.get_by_id(ongoing.id).await?.unwrap().status,
        BookingStatus::Confirmed
    );

    Ok(())
}

#[tokio::test]
async fn reports_zero_when_nothing_to_close() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert_eq!(repo.complete_past(Utc::now()).await?, 0);

    Ok(())
}
