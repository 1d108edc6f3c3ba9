mod booking;
mod payment;
mod refresh_token;
mod room;
mod room_type;
mod user;
