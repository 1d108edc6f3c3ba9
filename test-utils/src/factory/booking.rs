//! Booking factory for creating test ledger entries.
//!
//! Inserts rows directly, bypassing the conflict guard on purpose: tests
//! use it to set up arbitrary ledger states, including ones the API would
//! refuse.

use chrono::{DateTime, Duration, Utc};
use entity::enums::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    user_id: i32,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    guests: i32,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Defaults: a confirmed two-guest stay starting tomorrow for three
    /// nights.
    pub fn new(db: &'a DatabaseConnection, room_id: i32, user_id: i32) -> Self {
        let check_in = Utc::now() + Duration::days(1);
        Self {
            db,
            room_id,
            user_id,
            check_in,
            check_out: check_in + Duration::days(3),
            guests: 2,
            status: BookingStatus::Confirmed,
        }
    }

    pub fn check_in(mut self, check_in: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn check_out(mut self, check_out: DateTime<Utc>) -> Self {
        self.check_out = check_out;
        self
    }

    /// Sets both stay boundaries at once.
    pub fn stay(mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            guests: ActiveValue::Set(self.guests),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id, user_id).build().await
}
