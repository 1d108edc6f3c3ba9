//! Payment business logic.
//!
//! Amounts are derived, never client-supplied: nights × the room's price
//! per night at the time the payment is recorded. Marking a payment paid
//! confirms a still-pending booking in the same operation.

use chrono::Utc;
use entity::enums::{BookingStatus, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto},
    server::{
        data::{booking::BookingRepository, payment::PaymentRepository, room::RoomRepository},
        error::AppError,
        model::{
            booking::Booking,
            payment::{transition_allowed, CreatePaymentParam, Payment},
        },
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending payment for a booking.
    pub async fn create(
        &self,
        booking_id: i32,
        dto: CreatePaymentDto,
    ) -> Result<PaymentDto, AppError> {
        let booking_entity = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
        let booking = Booking::from_entity(booking_entity);

        if matches!(
            booking.status,
            BookingStatus::Cancelled | BookingStatus::Completed
        ) {
            return Err(AppError::BadRequest(
                "Payments can only be recorded for pending or confirmed bookings".to_string(),
            ));
        }

        let room = RoomRepository::new(self.db)
            .get_by_id_with_deleted(booking.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let amount = Decimal::from(booking.stay.nights()) * room.price_per_night;

        let created = PaymentRepository::new(self.db)
            .create(CreatePaymentParam {
                booking_id: booking.id,
                amount,
                method: dto.method.into(),
            })
            .await?;

        Ok(Payment::from_entity(created).into_dto())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PaymentDto, AppError> {
        let entity = PaymentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        Ok(Payment::from_entity(entity).into_dto())
    }

    pub async fn list_for_booking(&self, booking_id: i32) -> Result<Vec<PaymentDto>, AppError> {
        BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let payments = PaymentRepository::new(self.db)
            .list_for_booking(booking_id)
            .await?;

        Ok(payments
            .into_iter()
            .map(|p| Payment::from_entity(p).into_dto())
            .collect())
    }

    /// Settles, fails, refunds or retries a payment along the allowed
    /// transitions. Settling as paid stamps `paid_at` and confirms the
    /// booking if it is still pending.
    pub async fn update_status(
        &self,
        id: i32,
        next: PaymentStatus,
    ) -> Result<PaymentDto, AppError> {
        let repo = PaymentRepository::new(self.db);

        let entity = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if !transition_allowed(entity.status, next) {
            return Err(AppError::BadRequest(format!(
                "Payment status cannot change from {:?} to {:?}",
                entity.status, next
            )));
        }

        let paid_at = (next == PaymentStatus::Paid).then(Utc::now);

        let updated = repo
            .update_status(id, next, paid_at)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if next == PaymentStatus::Paid {
            let booking_repo = BookingRepository::new(self.db);
            if let Some(booking) = booking_repo.get_by_id(updated.booking_id).await? {
                if booking.status == BookingStatus::Pending {
                    booking_repo
                        .update_status(booking.id, BookingStatus::Confirmed)
                        .await?;
                }
            }
        }

        Ok(Payment::from_entity(updated).into_dto())
    }
}
