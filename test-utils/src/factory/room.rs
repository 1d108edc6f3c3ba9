//! Room factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::enums::{RoomKind, RoomStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Defaults: unique room number (`101`, `102`, ...), double room, $100 per
/// night, 2 guests, no amenities, available, not deleted.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    kind: RoomKind,
    price_per_night: Decimal,
    max_guests: i32,
    description: Option<String>,
    amenities: Vec<String>,
    status: RoomStatus,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_number: format!("{}", 100 + next_id()),
            kind: RoomKind::Double,
            price_per_night: Decimal::new(100, 0),
            max_guests: 2,
            description: None,
            amenities: Vec::new(),
            status: RoomStatus::Available,
            deleted_at: None,
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn kind(mut self, kind: RoomKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn price_per_night(mut self, price: Decimal) -> Self {
        self.price_per_night = price;
        self
    }

    pub fn max_guests(mut self, max_guests: i32) -> Self {
        self.max_guests = max_guests;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.amenities = amenities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        let mut tags = self.amenities;
        tags.sort();

        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            room_number: ActiveValue::Set(self.room_number),
            kind: ActiveValue::Set(self.kind),
            price_per_night: ActiveValue::Set(self.price_per_night),
            max_guests: ActiveValue::Set(self.max_guests),
            description: ActiveValue::Set(self.description),
            amenities: ActiveValue::Set(
                serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string()),
            ),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available double room with default values.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
