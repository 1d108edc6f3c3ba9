//! Domain models and operation parameter types.
//!
//! Each domain file owns the conversions at the layer boundaries:
//! `from_entity` lifts a SeaORM model into the domain (decoding stored
//! representations such as the amenities JSON column on the way in), and
//! `into_dto` produces the wire shape. `*Param` structs carry validated
//! input from controllers into services and repositories.

pub mod auth;
pub mod booking;
pub mod payment;
pub mod room;
pub mod room_type;
pub mod user;
