//! Room type catalog repository.

use chrono::Utc;
use entity::enums::RoomKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::room_type::{CreateRoomTypeParam, UpdateRoomTypeParam};

pub struct RoomTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateRoomTypeParam,
    ) -> Result<entity::room_type::Model, DbErr> {
        let now = Utc::now();

        entity::room_type::ActiveModel {
            kind: ActiveValue::Set(param.kind),
            description: ActiveValue::Set(param.description),
            base_price: ActiveValue::Set(param.base_price),
            default_max_guests: ActiveValue::Set(param.default_max_guests),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_kind(
        &self,
        kind: RoomKind,
    ) -> Result<Option<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find()
            .filter(entity::room_type::Column::Kind.eq(kind))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find()
            .order_by_asc(entity::room_type::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateRoomTypeParam,
    ) -> Result<Option<entity::room_type::Model>, DbErr> {
        let Some(entry) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::room_type::ActiveModel = entry.into();

        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(base_price) = param.base_price {
            active.base_price = ActiveValue::Set(base_price);
        }
        if let Some(default_max_guests) = param.default_max_guests {
            active.default_max_guests = ActiveValue::Set(default_max_guests);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
