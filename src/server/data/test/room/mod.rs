use crate::server::{
    data::room::RoomRepository,
    model::{
        booking::StayInterval,
        room::{AmenitySet, CreateRoomParam, RoomSearchCriteria, SortField, SortOrder, UpdateRoomParam},
    },
};
use chrono::{DateTime, TimeZone, Utc};
use entity::enums::{BookingStatus, RoomKind, RoomStatus};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod search_available;
mod soft_delete;
mod update;

/// Midnight UTC on a day in March 2024, the month all fixed-date scenarios
/// use.
fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
}

/// Criteria with only the stay interval set; individual tests fill in the
/// filters they exercise.
fn criteria(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> RoomSearchCriteria {
    RoomSearchCriteria {
        stay: StayInterval::new(check_in, check_out).unwrap(),
        kind: None,
        min_price: None,
        max_price: None,
        guests: None,
        amenities: AmenitySet::new(),
        sort_by: None,
        sort_order: SortOrder::default(),
    }
}
