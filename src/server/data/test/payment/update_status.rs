use super::*;

#[tokio::test]
async fn stamps_paid_at_on_settlement() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::create_booking(db, room.id, user.id).await?;
    let payment = factory::payment::create_payment(db, booking.id).await?;

    let repo = PaymentRepository::new(db);
    let paid_at = Utc::now();
    let updated = repo
        .update_status(payment.id, PaymentStatus::Paid, Some(paid_at))
        .await?
        .unwrap();

    assert_eq!(updated.status, PaymentStatus::Paid);
    assert_eq!(updated.paid_at, Some(paid_at));

    Ok(())
}

/// Transitions without a settlement time leave paid_at untouched.
#[tokio::test]
async fn keeps_paid_at_when_not_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::create_booking(db, room.id, user.id).await?;
    let payment = factory::payment::create_payment(db, booking.id).await?;

    let repo = PaymentRepository::new(db);
    let paid_at = Utc::now();
    repo.update_status(payment.id, PaymentStatus::Paid, Some(paid_at))
        .await?;

    let refunded = repo
        .update_status(payment.id, PaymentStatus::Refunded, None)
        .await?
        .unwrap();

    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert_eq!(refunded.paid_at, Some(paid_at));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);

    assert!(repo
        .update_status(999, PaymentStatus::Paid, None)
        .await?
        .is_none());

    Ok(())
}
