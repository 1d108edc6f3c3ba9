//! HTTP request handlers.
//!
//! Controllers stay thin: authenticate via the guard, convert DTOs,
//! delegate to a service, choose the status code. Everything else lives in
//! the service layer.

pub mod auth;
pub mod booking;
pub mod param;
pub mod payment;
pub mod room;
pub mod room_type;
pub mod user;
