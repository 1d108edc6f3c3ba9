//! Payment factory.

use chrono::Utc;
use entity::enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending card payment over $300 for the given booking.
pub async fn create_payment(
    db: &DatabaseConnection,
    booking_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    let now = Utc::now();

    entity::payment::ActiveModel {
        id: ActiveValue::NotSet,
        booking_id: ActiveValue::Set(booking_id),
        amount: ActiveValue::Set(Decimal::new(300, 0)),
        method: ActiveValue::Set(PaymentMethod::Card),
        status: ActiveValue::Set(PaymentStatus::Pending),
        paid_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
