use super::*;

#[tokio::test]
async fn creates_pending_booking_when_room_is_free() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_if_free(CreateBookingParam {
            room_id: room.id,
            user_id: user.id,
            stay: stay(20, 25),
            guests: 2,
        })
        .await?
        .expect("room is free");

    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.check_in, march(20));
    assert_eq!(booking.check_out, march(25));

    Ok(())
}

/// The commit-time guard: an overlapping non-cancelled booking makes the
/// create return None instead of inserting a double booking.
#[tokio::test]
async fn refuses_overlapping_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_free(CreateBookingParam {
            room_id: room.id,
            user_id: user.id,
            stay: stay(24, 27),
            guests: 1,
        })
        .await?;

    assert!(result.is_none());

    // The ledger still holds exactly one booking for the room.
    assert_eq!(repo.list_for_room(room.id).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn accepts_back_to_back_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_if_free(CreateBookingParam {
            room_id: room.id,
            user_id: user.id,
            stay: stay(25, 28),
            guests: 2,
        })
        .await?;

    assert!(booking.is_some());

    Ok(())
}

#[tokio::test]
async fn ignores_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_if_free(CreateBookingParam {
            room_id: room.id,
            user_id: user.id,
            stay: stay(21, 23),
            guests: 2,
        })
        .await?;

    assert!(booking.is_some());

    Ok(())
}

/// Bookings on one room never block a different room.
#[tokio::test]
async fn other_rooms_are_unaffected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, busy_room) = factory::helpers::create_booking_dependencies(db).await?;
    let other_room = factory::room::create_room(db).await?;
    factory::booking::BookingFactory::new(db, busy_room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create_if_free(CreateBookingParam {
            room_id: other_room.id,
            user_id: user.id,
            stay: stay(20, 25),
            guests: 2,
        })
        .await?;

    assert!(booking.is_some());

    Ok(())
}
