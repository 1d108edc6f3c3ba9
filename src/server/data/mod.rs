//! Database repository layer for all domain entities.
//!
//! Repositories own every query, insert, update and soft delete. They work
//! on SeaORM entity models (or lift them into domain models at the
//! boundary) and never reach back up into services. Relationships are
//! followed through explicit foreign-key queries here, on demand, rather
//! than through navigable object graphs.

pub mod booking;
pub mod payment;
pub mod refresh_token;
pub mod room;
pub mod room_type;
pub mod user;

#[cfg(test)]
mod test;
