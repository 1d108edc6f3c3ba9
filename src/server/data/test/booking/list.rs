use super::*;

#[tokio::test]
async fn filters_by_room_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_a, room_a) = factory::helpers::create_booking_dependencies(db).await?;
    let user_b = factory::user::create_user(db).await?;
    let room_b = factory::room::create_room(db).await?;

    factory::booking::BookingFactory::new(db, room_a.id, user_a.id)
        .stay(march(1), march(3))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room_a.id, user_b.id)
        .stay(march(5), march(7))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room_b.id, user_b.id)
        .stay(march(9), march(11))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let (all, total) = repo
        .list(&ListBookingsParam {
            page: 0,
            per_page: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 3);
    assert_eq!(all.len(), 3);

    let (for_room_a, total) = repo
        .list(&ListBookingsParam {
            room_id: Some(room_a.id),
            page: 0,
            per_page: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 2);
    assert!(for_room_a.iter().all(|b| b.room_id == room_a.id));

    let (for_user_b, total) = repo
        .list(&ListBookingsParam {
            user_id: Some(user_b.id),
            page: 0,
            per_page: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 2);
    assert!(for_user_b.iter().all(|b| b.user_id == user_b.id));

    // Conjunction of both filters.
    let (narrow, total) = repo
        .list(&ListBookingsParam {
            room_id: Some(room_a.id),
            user_id: Some(user_b.id),
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(narrow[0].room_id, room_a.id);
    assert_eq!(narrow[0].user_id, user_b.id);

    Ok(())
}

#[tokio::test]
async fn paginates_newest_stay_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    for day in [1, 5, 9] {
        factory::booking::BookingFactory::new(db, room.id, user.id)
            .stay(march(day), march(day + 2))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let (page, total) = repo
        .list(&ListBookingsParam {
            page: 0,
            per_page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].check_in, march(9));
    assert_eq!(page[1].check_in, march(5));

    Ok(())
}

#[tokio::test]
async fn list_for_room_returns_history_in_check_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    for day in [9, 1, 5] {
        factory::booking::BookingFactory::new(db, room.id, user.id)
            .stay(march(day), march(day + 2))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let history = repo.list_for_room(room.id).await?;

    let check_ins: Vec<_> = history.iter().map(|b| b.check_in).collect();
    assert_eq!(check_ins, vec![march(1), march(5), march(9)]);

    Ok(())
}
