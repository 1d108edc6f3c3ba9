use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Room category on the wire: `single`, `double`, `suite`, `deluxe`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomKindDto {
    Single,
    Double,
    Suite,
    Deluxe,
}

/// Operational room status on the wire: `available`, `occupied`,
/// `maintenance`, `cleaning`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatusDto {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    #[serde(rename = "type")]
    pub kind: RoomKindDto,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub availability_status: RoomStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomDto {
    pub room_number: String,
    #[serde(rename = "type")]
    pub kind: RoomKindDto,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Partial update; absent fields keep their current value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomDto {
    #[serde(rename = "type")]
    pub kind: Option<RoomKindDto>,
    pub price_per_night: Option<Decimal>,
    pub max_guests: Option<i32>,
    pub description: Option<Option<String>>,
    pub amenities: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomStatusDto {
    pub status: RoomStatusDto,
}

/// Query string of `GET /api/rooms/search` (and the legacy
/// `GET /api/rooms/available`). Dates are ISO `YYYY-MM-DD`; `amenities`
/// accepts a JSON array string (`["wifi","tv"]`) or a comma-separated list.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchQuery {
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub room_type: Option<String>,
    pub max_guests: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub amenities: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRoomsDto {
    pub rooms: Vec<RoomDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
