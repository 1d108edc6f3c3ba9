use super::*;

#[tokio::test]
async fn finds_overlapping_non_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let confirmed = factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(21), march(24))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let conflicts = repo.find_conflicts(room.id, &stay(22, 26), None).await?;

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, confirmed.id);

    Ok(())
}

/// Half-open boundaries: touching intervals are not conflicts, one shared
/// night is.
#[tokio::test]
async fn respects_half_open_boundaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(repo.find_conflicts(room.id, &stay(25, 28), None).await?.is_empty());
    assert!(repo.find_conflicts(room.id, &stay(18, 20), None).await?.is_empty());
    assert_eq!(repo.find_conflicts(room.id, &stay(24, 26), None).await?.len(), 1);
    assert_eq!(repo.find_conflicts(room.id, &stay(19, 21), None).await?.len(), 1);

    Ok(())
}

/// The exclusion id lets a booking be rescheduled over its own dates.
#[tokio::test]
async fn excluded_booking_is_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.find_conflicts(room.id, &stay(20, 25), None).await?.len(), 1);
    assert!(repo
        .find_conflicts(room.id, &stay(20, 25), Some(booking.id))
        .await?
        .is_empty());

    Ok(())
}
