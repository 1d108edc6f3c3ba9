//! Room catalog business logic and the availability search.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::room::{
        CreateRoomDto, PaginatedRoomsDto, RoomDto, RoomSearchQuery, UpdateRoomDto,
        UpdateRoomStatusDto,
    },
    server::{
        data::room::RoomRepository,
        error::AppError,
        model::room::{
            AmenitySet, CreateRoomParam, Room, RoomSearchCriteria, UpdateRoomParam,
        },
    },
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a catalog entry, rejecting duplicate room numbers with a
    /// conflict.
    pub async fn create(&self, dto: CreateRoomDto) -> Result<RoomDto, AppError> {
        let room_number = dto.room_number.trim().to_string();

        if room_number.is_empty() {
            return Err(AppError::BadRequest(
                "roomNumber must not be empty".to_string(),
            ));
        }
        validate_price(dto.price_per_night)?;
        validate_max_guests(dto.max_guests)?;

        let repo = RoomRepository::new(self.db);

        if repo.find_by_number(&room_number).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Room number '{}' already exists",
                room_number
            )));
        }

        let created = repo
            .create(CreateRoomParam {
                room_number,
                kind: dto.kind.into(),
                price_per_night: dto.price_per_night,
                max_guests: dto.max_guests,
                description: dto.description,
                amenities: AmenitySet::from_tags(dto.amenities),
            })
            .await?;

        Ok(Room::from_entity(created)?.into_dto())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RoomDto, AppError> {
        let entity = RoomRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(Room::from_entity(entity)?.into_dto())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRoomsDto, AppError> {
        let (entities, total) = RoomRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let rooms = entities
            .into_iter()
            .map(|e| Room::from_entity(e).map(Room::into_dto))
            .collect::<Result<Vec<_>, _>>()?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedRoomsDto {
            rooms,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn update(&self, id: i32, dto: UpdateRoomDto) -> Result<RoomDto, AppError> {
        if let Some(price) = dto.price_per_night {
            validate_price(price)?;
        }
        if let Some(max_guests) = dto.max_guests {
            validate_max_guests(max_guests)?;
        }

        let updated = RoomRepository::new(self.db)
            .update(
                id,
                UpdateRoomParam {
                    kind: dto.kind.map(Into::into),
                    price_per_night: dto.price_per_night,
                    max_guests: dto.max_guests,
                    description: dto.description,
                    amenities: dto.amenities.map(AmenitySet::from_tags),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(Room::from_entity(updated)?.into_dto())
    }

    /// Sets the administrative status (maintenance, cleaning, ...). This is
    /// the staff-facing availability layer; booking conflicts are computed
    /// separately at search time.
    pub async fn set_status(&self, id: i32, dto: UpdateRoomStatusDto) -> Result<RoomDto, AppError> {
        let updated = RoomRepository::new(self.db)
            .set_status(id, dto.status.into())
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(Room::from_entity(updated)?.into_dto())
    }

    /// Soft-deletes a room; its booking history stays in the ledger.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = RoomRepository::new(self.db).soft_delete(id).await?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Room not found".to_string()))
        }
    }

    /// Availability search. Validates the raw query, runs the static and
    /// temporal filters in SQL, then narrows by amenity tags on the decoded
    /// set — every requested tag must be present on the room.
    ///
    /// An empty result is a normal outcome, not an error; storage failures
    /// propagate as errors and are never folded into "no rooms".
    pub async fn search(&self, query: RoomSearchQuery) -> Result<Vec<RoomDto>, AppError> {
        let criteria = RoomSearchCriteria::from_query(query)?;

        let entities = RoomRepository::new(self.db)
            .search_available(&criteria)
            .await?;

        let mut rooms = Vec::with_capacity(entities.len());
        for entity in entities {
            let room = Room::from_entity(entity)?;
            if room.amenities.contains_all(&criteria.amenities) {
                rooms.push(room.into_dto());
            }
        }

        Ok(rooms)
    }
}

fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "pricePerNight must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_max_guests(max_guests: i32) -> Result<(), AppError> {
    if max_guests < 1 {
        return Err(AppError::BadRequest(
            "maxGuests must be at least 1".to_string(),
        ));
    }
    Ok(())
}
