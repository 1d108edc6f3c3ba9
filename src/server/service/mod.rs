//! Business logic layer between controllers and repositories.
//!
//! Services validate input, enforce domain rules (status machines, price
//! and capacity bounds, conflict policies) and orchestrate repositories,
//! returning wire DTOs upward. They never touch HTTP types.

pub mod auth;
pub mod booking;
pub mod payment;
pub mod room;
pub mod room_type;
pub mod setup;
pub mod user;
