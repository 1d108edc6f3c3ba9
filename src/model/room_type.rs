use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::room::RoomKindDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: RoomKindDto,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub default_max_guests: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomTypeDto {
    #[serde(rename = "type")]
    pub kind: RoomKindDto,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub default_max_guests: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomTypeDto {
    pub description: Option<Option<String>>,
    pub base_price: Option<Decimal>,
    pub default_max_guests: Option<i32>,
}
