use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking lifecycle state on the wire: `pending`, `confirmed`,
/// `cancelled`, `completed`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub user_id: i32,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub guests: i32,
    pub status: BookingStatusDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub room_id: i32,
    /// ISO date, `YYYY-MM-DD`.
    pub check_in_date: String,
    /// ISO date, `YYYY-MM-DD`; must be strictly after `checkInDate`.
    pub check_out_date: String,
    pub guests: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
