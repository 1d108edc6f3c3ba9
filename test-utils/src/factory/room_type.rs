//! Room type factory.

use chrono::Utc;
use entity::enums::RoomKind;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a room type catalog entry for the given kind.
pub async fn create_room_type(
    db: &DatabaseConnection,
    kind: RoomKind,
) -> Result<entity::room_type::Model, DbErr> {
    let now = Utc::now();

    entity::room_type::ActiveModel {
        id: ActiveValue::NotSet,
        kind: ActiveValue::Set(kind),
        description: ActiveValue::Set(Some("Test room type".to_string())),
        base_price: ActiveValue::Set(Decimal::new(80, 0)),
        default_max_guests: ActiveValue::Set(2),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
