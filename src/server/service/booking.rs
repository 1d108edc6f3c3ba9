//! Booking lifecycle business logic.

use chrono::Utc;
use entity::enums::{BookingStatus, RoomStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{BookingDto, CreateBookingDto, PaginatedBookingsDto},
    server::{
        data::{booking::BookingRepository, room::RoomRepository},
        error::AppError,
        model::booking::{
            transition_allowed, Booking, CreateBookingParam, ListBookingsParam, StayInterval,
        },
        util::parse::parse_iso_date,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room for a stay.
    ///
    /// Validates the interval and guest count against the room, requires
    /// the room to be operationally available, and finally hands the
    /// conflict decision to the repository, which re-checks overlap and
    /// inserts within one transaction. A lost race therefore surfaces as
    /// the same conflict error as a straightforwardly taken room.
    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateBookingDto,
    ) -> Result<BookingDto, AppError> {
        let stay = StayInterval::new(
            parse_iso_date(&dto.check_in_date)?,
            parse_iso_date(&dto.check_out_date)?,
        )?;

        if stay.check_out() <= Utc::now() {
            return Err(AppError::BadRequest(
                "Stay must not lie entirely in the past".to_string(),
            ));
        }

        if dto.guests < 1 {
            return Err(AppError::BadRequest(
                "guests must be at least 1".to_string(),
            ));
        }

        let room = RoomRepository::new(self.db)
            .get_by_id(dto.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if dto.guests > room.max_guests {
            return Err(AppError::BadRequest(format!(
                "Room {} sleeps at most {} guests",
                room.room_number, room.max_guests
            )));
        }

        if room.status != RoomStatus::Available {
            return Err(AppError::Conflict(format!(
                "Room {} is not open for booking",
                room.room_number
            )));
        }

        let created = BookingRepository::new(self.db)
            .create_if_free(CreateBookingParam {
                room_id: room.id,
                user_id,
                stay,
                guests: dto.guests,
            })
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!(
                    "Room {} is already booked for the requested dates",
                    room.room_number
                ))
            })?;

        Ok(Booking::from_entity(created).into_dto(room.room_number))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BookingDto, AppError> {
        let entity = BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let booking = Booking::from_entity(entity);
        let room_number = self.room_number_for(booking.room_id).await?;

        Ok(booking.into_dto(room_number))
    }

    /// Raw ledger entry without DTO enrichment, for ownership checks.
    pub async fn find(&self, id: i32) -> Result<Option<Booking>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(Booking::from_entity))
    }

    pub async fn list(&self, param: ListBookingsParam) -> Result<PaginatedBookingsDto, AppError> {
        let (entities, total) = BookingRepository::new(self.db).list(&param).await?;

        let mut bookings = Vec::with_capacity(entities.len());
        for entity in entities {
            let booking = Booking::from_entity(entity);
            let room_number = self.room_number_for(booking.room_id).await?;
            bookings.push(booking.into_dto(room_number));
        }

        let total_pages = if param.per_page > 0 {
            total.div_ceil(param.per_page)
        } else {
            0
        };

        Ok(PaginatedBookingsDto {
            bookings,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Full booking history for one room (staff ledger view). Fails with
    /// not-found when the room never existed; a soft-deleted room still
    /// shows its history.
    pub async fn list_for_room(&self, room_id: i32) -> Result<Vec<BookingDto>, AppError> {
        let room = RoomRepository::new(self.db)
            .get_by_id_with_deleted(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let entities = BookingRepository::new(self.db).list_for_room(room_id).await?;

        Ok(entities
            .into_iter()
            .map(|e| Booking::from_entity(e).into_dto(room.room_number.clone()))
            .collect())
    }

    /// Moves a booking along its lifecycle, rejecting transitions the
    /// status machine does not allow (e.g. completing a pending booking or
    /// resurrecting a cancelled one).
    pub async fn update_status(
        &self,
        id: i32,
        next: BookingStatus,
    ) -> Result<BookingDto, AppError> {
        let repo = BookingRepository::new(self.db);

        let entity = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !transition_allowed(entity.status, next) {
            return Err(AppError::BadRequest(format!(
                "Booking status cannot change from {:?} to {:?}",
                entity.status, next
            )));
        }

        let updated = repo
            .update_status(id, next)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let booking = Booking::from_entity(updated);
        let room_number = self.room_number_for(booking.room_id).await?;

        Ok(booking.into_dto(room_number))
    }

    /// Guest-facing cancellation; same status machine as
    /// [`Self::update_status`].
    pub async fn cancel(&self, id: i32) -> Result<BookingDto, AppError> {
        self.update_status(id, BookingStatus::Cancelled).await
    }

    async fn room_number_for(&self, room_id: i32) -> Result<String, AppError> {
        let room = RoomRepository::new(self.db)
            .get_by_id_with_deleted(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(room.room_number)
    }
}
