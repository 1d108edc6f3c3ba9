//! Room type catalog domain models.

use chrono::{DateTime, Utc};
use entity::enums::RoomKind;
use rust_decimal::Decimal;

use crate::model::room_type::RoomTypeDto;

/// Catalog metadata for one room category.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypeEntry {
    pub id: i32,
    pub kind: RoomKind,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub default_max_guests: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoomTypeEntry {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            description: entity.description,
            base_price: entity.base_price,
            default_max_guests: entity.default_max_guests,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RoomTypeDto {
        RoomTypeDto {
            id: self.id,
            kind: self.kind.into(),
            description: self.description,
            base_price: self.base_price,
            default_max_guests: self.default_max_guests,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomTypeParam {
    pub kind: RoomKind,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub default_max_guests: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomTypeParam {
    pub description: Option<Option<String>>,
    pub base_price: Option<Decimal>,
    pub default_max_guests: Option<i32>,
}
