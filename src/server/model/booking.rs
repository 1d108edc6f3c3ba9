//! Booking domain models, the stay interval type, and the status machine.

use chrono::{DateTime, Utc};
use entity::enums::BookingStatus;

use crate::{
    model::booking::{BookingDto, BookingStatusDto},
    server::error::AppError,
};

impl From<BookingStatus> for BookingStatusDto {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
            BookingStatus::Completed => Self::Completed,
        }
    }
}

impl From<BookingStatusDto> for BookingStatus {
    fn from(value: BookingStatusDto) -> Self {
        match value {
            BookingStatusDto::Pending => Self::Pending,
            BookingStatusDto::Confirmed => Self::Confirmed,
            BookingStatusDto::Cancelled => Self::Cancelled,
            BookingStatusDto::Completed => Self::Completed,
        }
    }
}

/// Half-open stay interval `[check_in, check_out)`.
///
/// The half-open convention is what makes back-to-back stays work: a stay
/// ending at noon on the 25th and one starting at noon on the 25th share no
/// instant and therefore never conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayInterval {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl StayInterval {
    /// Builds an interval, rejecting zero-length and inverted ranges.
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<Self, AppError> {
        if check_out <= check_in {
            return Err(AppError::BadRequest(
                "checkOutDate must be after checkInDate".to_string(),
            ));
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Two half-open intervals overlap iff each starts before the other
    /// ends.
    pub fn overlaps(&self, other: &StayInterval) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Whole nights covered by the interval, rounding partial nights up.
    pub fn nights(&self) -> i64 {
        let hours = (self.check_out - self.check_in).num_hours();
        (hours + 23) / 24
    }
}

/// True when a booking may move from `from` to `to`.
///
/// Forward path: pending -> confirmed -> completed. Cancellation is allowed
/// from pending and confirmed; completed and cancelled are terminal.
/// Self-transitions are rejected so that status updates always describe a
/// change.
pub fn transition_allowed(from: BookingStatus, to: BookingStatus) -> bool {
    matches!(
        (from, to),
        (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Pending, BookingStatus::Cancelled)
            | (BookingStatus::Confirmed, BookingStatus::Completed)
            | (BookingStatus::Confirmed, BookingStatus::Cancelled)
    )
}

/// Booking ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub stay: StayInterval,
    pub guests: i32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            // Stored rows were validated on the way in, but tolerate an
            // out-of-band inverted pair rather than panic: treat it as a
            // zero-significance interval anchored at check_in.
            stay: StayInterval {
                check_in: entity.check_in,
                check_out: entity.check_out.max(entity.check_in),
            },
            guests: entity.guests,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to the wire shape; the owning room's number is joined in by
    /// the service.
    pub fn into_dto(self, room_number: String) -> BookingDto {
        BookingDto {
            id: self.id,
            room_id: self.room_id,
            room_number,
            user_id: self.user_id,
            check_in_date: self.stay.check_in,
            check_out_date: self.stay.check_out,
            guests: self.guests,
            status: self.status.into(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a booking. The interval is already validated.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub room_id: i32,
    pub user_id: i32,
    pub stay: StayInterval,
    pub guests: i32,
}

/// Filter for the booking ledger listing. Both filters are optional and
/// conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ListBookingsParam {
    pub room_id: Option<i32>,
    pub user_id: Option<i32>,
    pub page: u64,
    pub per_page: u64,
}
