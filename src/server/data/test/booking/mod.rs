use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingParam, ListBookingsParam, StayInterval},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::enums::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete_past;
mod create_if_free;
mod find_conflicts;
mod list;
mod update_status;

fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
}

fn stay(check_in_day: u32, check_out_day: u32) -> StayInterval {
    StayInterval::new(march(check_in_day), march(check_out_day)).unwrap()
}
