use super::*;

/// A room with a confirmed booking for 03-20 → 03-25 must not match a
/// search for 03-22 → 03-24.
#[tokio::test]
async fn excludes_room_with_overlapping_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::RoomFactory::new(db)
        .room_number("101")
        .price_per_night(Decimal::new(100, 0))
        .max_guests(2)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let result = repo.search_available(&criteria(march(22), march(24))).await?;

    assert!(result.is_empty());

    Ok(())
}

/// A stay starting exactly on the existing booking's checkout day does not
/// conflict (half-open intervals).
#[tokio::test]
async fn includes_room_for_back_to_back_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::RoomFactory::new(db).room_number("101").build().await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let result = repo.search_available(&criteria(march(25), march(27))).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, room.id);

    Ok(())
}

/// A range entirely before the existing booking does not conflict.
#[tokio::test]
async fn includes_room_for_disjoint_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::RoomFactory::new(db).room_number("101").build().await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let result = repo.search_available(&criteria(march(10), march(15))).await?;

    assert_eq!(result.len(), 1);

    Ok(())
}

/// A room under maintenance never matches, bookings or not.
#[tokio::test]
async fn excludes_room_under_maintenance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .room_number("102")
        .status(RoomStatus::Maintenance)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo
        .search_available(&criteria(march(1), march(28)))
        .await?
        .is_empty());
    assert!(repo
        .search_available(&criteria(march(10), march(11)))
        .await?
        .is_empty());

    Ok(())
}

/// Cancelled bookings are invisible to the conflict check.
#[tokio::test]
async fn cancelled_booking_does_not_block() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let result = repo.search_available(&criteria(march(22), march(24))).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, room.id);

    Ok(())
}

/// Pending bookings block just like confirmed ones.
#[tokio::test]
async fn pending_booking_blocks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(20), march(25))
        .status(BookingStatus::Pending)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo
        .search_available(&criteria(march(24), march(26)))
        .await?
        .is_empty());

    Ok(())
}

/// A room with no booking history trivially has no conflicts.
#[tokio::test]
async fn includes_room_with_no_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    let result = repo.search_available(&criteria(march(1), march(28))).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, room.id);

    Ok(())
}

/// Soft-deleted rooms are gone from search regardless of status.
#[tokio::test]
async fn excludes_soft_deleted_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .deleted_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo
        .search_available(&criteria(march(1), march(28)))
        .await?
        .is_empty());

    Ok(())
}

/// Several non-cancelled bookings overlapping the range still produce the
/// room at most once — and several cancelled ones still produce it exactly
/// once.
#[tokio::test]
async fn returns_each_room_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let free_room = factory::room::create_room(db).await?;
    for _ in 0..3 {
        factory::booking::BookingFactory::new(db, free_room.id, user.id)
            .stay(march(20), march(25))
            .status(BookingStatus::Cancelled)
            .build()
            .await?;
    }

    let busy_room = factory::room::create_room(db).await?;
    factory::booking::BookingFactory::new(db, busy_room.id, user.id)
        .stay(march(19), march(22))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, busy_room.id, user.id)
        .stay(march(23), march(26))
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let result = repo.search_available(&criteria(march(20), march(25))).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, free_room.id);

    Ok(())
}

/// Static filters: kind, capacity, and the inclusive price window.
#[tokio::test]
async fn applies_static_filters_conjunctively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap_single = factory::room::RoomFactory::new(db)
        .kind(RoomKind::Single)
        .price_per_night(Decimal::new(60, 0))
        .max_guests(1)
        .build()
        .await?;
    let suite = factory::room::RoomFactory::new(db)
        .kind(RoomKind::Suite)
        .price_per_night(Decimal::new(250, 0))
        .max_guests(4)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let mut by_kind = criteria(march(1), march(5));
    by_kind.kind = Some(RoomKind::Suite);
    let result = repo.search_available(&by_kind).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, suite.id);

    let mut by_capacity = criteria(march(1), march(5));
    by_capacity.guests = Some(3);
    let result = repo.search_available(&by_capacity).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, suite.id);

    // Price bounds are inclusive on both ends.
    let mut by_price = criteria(march(1), march(5));
    by_price.min_price = Some(Decimal::new(60, 0));
    by_price.max_price = Some(Decimal::new(100, 0));
    let result = repo.search_available(&by_price).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, cheap_single.id);

    // Conjunction: a kind filter on top of the price filter empties it.
    by_price.kind = Some(RoomKind::Suite);
    assert!(repo.search_available(&by_price).await?.is_empty());

    Ok(())
}

/// Sorting by price in both directions, id as tie break.
#[tokio::test]
async fn sorts_by_requested_field_with_id_tie_break() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mid = factory::room::RoomFactory::new(db)
        .price_per_night(Decimal::new(150, 0))
        .build()
        .await?;
    let cheap_a = factory::room::RoomFactory::new(db)
        .price_per_night(Decimal::new(90, 0))
        .build()
        .await?;
    let cheap_b = factory::room::RoomFactory::new(db)
        .price_per_night(Decimal::new(90, 0))
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let mut asc = criteria(march(1), march(5));
    asc.sort_by = Some(SortField::Price);
    let result = repo.search_available(&asc).await?;
    let ids: Vec<i32> = result.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![cheap_a.id, cheap_b.id, mid.id]);

    let mut desc = criteria(march(1), march(5));
    desc.sort_by = Some(SortField::Price);
    desc.sort_order = SortOrder::Desc;
    let result = repo.search_available(&desc).await?;
    let ids: Vec<i32> = result.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![mid.id, cheap_a.id, cheap_b.id]);

    Ok(())
}

/// Without a sort field the order is id ascending, and repeating the same
/// search returns the same sequence.
#[tokio::test]
async fn unsorted_results_are_deterministic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::room::create_room(db).await?;
    }

    let repo = RoomRepository::new(db);

    let first = repo.search_available(&criteria(march(1), march(5))).await?;
    let second = repo.search_available(&criteria(march(1), march(5))).await?;

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);

    let ids: Vec<i32> = first.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    Ok(())
}

/// Sorting by room number uses lexicographic order on the stored string.
#[tokio::test]
async fn sorts_by_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let b = factory::room::RoomFactory::new(db).room_number("B12").build().await?;
    let a = factory::room::RoomFactory::new(db).room_number("A07").build().await?;

    let repo = RoomRepository::new(db);

    let mut by_number = criteria(march(1), march(5));
    by_number.sort_by = Some(SortField::RoomNumber);
    let result = repo.search_available(&by_number).await?;
    let ids: Vec<i32> = result.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// A booking that only touches the stay's end boundary does not exclude
/// the room, while one overlapping the final night does.
#[tokio::test]
async fn respects_half_open_end_boundary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    // Booking starts exactly when the searched stay ends.
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(march(15), march(18))
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert_eq!(
        repo.search_available(&criteria(march(12), march(15))).await?.len(),
        1
    );
    assert!(repo
        .search_available(&criteria(march(12), march(16)))
        .await?
        .is_empty());

    Ok(())
}
