pub use super::booking::Entity as Booking;
pub use super::payment::Entity as Payment;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::user::Entity as User;
