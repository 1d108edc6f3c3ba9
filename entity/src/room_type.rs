use sea_orm::entity::prelude::*;

use crate::enums::RoomKind;

/// Catalog metadata describing one room category (default pricing and
/// capacity used when creating rooms of that kind).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub kind: RoomKind,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub default_max_guests: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
