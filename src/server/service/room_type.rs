//! Room type catalog business logic.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto},
    server::{
        data::room_type::RoomTypeRepository,
        error::AppError,
        model::room_type::{CreateRoomTypeParam, RoomTypeEntry, UpdateRoomTypeParam},
    },
};

pub struct RoomTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a catalog entry; each kind can exist only once.
    pub async fn create(&self, dto: CreateRoomTypeDto) -> Result<RoomTypeDto, AppError> {
        if dto.base_price < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "basePrice must not be negative".to_string(),
            ));
        }
        if dto.default_max_guests < 1 {
            return Err(AppError::BadRequest(
                "defaultMaxGuests must be at least 1".to_string(),
            ));
        }

        let repo = RoomTypeRepository::new(self.db);
        let kind = dto.kind.into();

        if repo.find_by_kind(kind).await?.is_some() {
            return Err(AppError::Conflict(
                "A room type with this kind already exists".to_string(),
            ));
        }

        let created = repo
            .create(CreateRoomTypeParam {
                kind,
                description: dto.description,
                base_price: dto.base_price,
                default_max_guests: dto.default_max_guests,
            })
            .await?;

        Ok(RoomTypeEntry::from_entity(created).into_dto())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RoomTypeDto, AppError> {
        let entity = RoomTypeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

        Ok(RoomTypeEntry::from_entity(entity).into_dto())
    }

    pub async fn get_all(&self) -> Result<Vec<RoomTypeDto>, AppError> {
        let entries = RoomTypeRepository::new(self.db).get_all().await?;

        Ok(entries
            .into_iter()
            .map(|e| RoomTypeEntry::from_entity(e).into_dto())
            .collect())
    }

    pub async fn update(&self, id: i32, dto: UpdateRoomTypeDto) -> Result<RoomTypeDto, AppError> {
        if let Some(base_price) = dto.base_price {
            if base_price < Decimal::ZERO {
                return Err(AppError::BadRequest(
                    "basePrice must not be negative".to_string(),
                ));
            }
        }
        if let Some(default_max_guests) = dto.default_max_guests {
            if default_max_guests < 1 {
                return Err(AppError::BadRequest(
                    "defaultMaxGuests must be at least 1".to_string(),
                ));
            }
        }

        let updated = RoomTypeRepository::new(self.db)
            .update(
                id,
                UpdateRoomTypeParam {
                    description: dto.description,
                    base_price: dto.base_price,
                    default_max_guests: dto.default_max_guests,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

        Ok(RoomTypeEntry::from_entity(updated).into_dto())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = RoomTypeRepository::new(self.db).delete(id).await?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Room type not found".to_string()))
        }
    }
}
