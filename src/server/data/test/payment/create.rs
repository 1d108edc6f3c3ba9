use super::*;

#[tokio::test]
async fn creates_pending_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::create_booking(db, room.id, user.id).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParam {
            booking_id: booking.id,
            amount: Decimal::new(450, 0),
            method: PaymentMethod::Card,
        })
        .await?;

    assert_eq!(payment.booking_id, booking.id);
    assert_eq!(payment.amount, Decimal::new(450, 0));
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert!(payment.paid_at.is_none());

    Ok(())
}

#[tokio::test]
async fn lists_payments_for_one_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::create_booking(db, room.id, user.id).await?;
    let other = factory::booking::BookingFactory::new(db, room.id, user.id)
        .stay(Utc::now() + chrono::Duration::days(10), Utc::now() + chrono::Duration::days(12))
        .status(entity::enums::BookingStatus::Cancelled)
        .build()
        .await?;

    factory::payment::create_payment(db, booking.id).await?;
    factory::payment::create_payment(db, booking.id).await?;
    factory::payment::create_payment(db, other.id).await?;

    let repo = PaymentRepository::new(db);
    let payments = repo.list_for_booking(booking.id).await?;

    assert_eq!(payments.len(), 2);
    assert!(payments.iter().all(|p| p.booking_id == booking.id));

    Ok(())
}
