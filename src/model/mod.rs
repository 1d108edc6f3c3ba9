//! Wire-format data transfer objects shared by all API endpoints.
//!
//! Everything here serializes camelCase to match the public REST contract.
//! Conversions to and from domain models live next to the domain types in
//! `server::model`, not here.

pub mod api;
pub mod auth;
pub mod booking;
pub mod payment;
pub mod room;
pub mod room_type;
pub mod user;
