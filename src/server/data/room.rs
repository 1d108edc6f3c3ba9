//! Room catalog repository, including the availability search.

use chrono::Utc;
use entity::enums::RoomStatus;
use sea_orm::{
    sea_query::{Condition, Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::room::{
    CreateRoomParam, RoomSearchCriteria, SortField, SortOrder, UpdateRoomParam,
};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room. Uniqueness of the room number is enforced by the
    /// schema; callers pre-check with [`Self::find_by_number`] to surface a
    /// clean conflict instead of a bare constraint violation.
    pub async fn create(&self, param: CreateRoomParam) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();

        entity::room::ActiveModel {
            room_number: ActiveValue::Set(param.room_number),
            kind: ActiveValue::Set(param.kind),
            price_per_night: ActiveValue::Set(param.price_per_night),
            max_guests: ActiveValue::Set(param.max_guests),
            description: ActiveValue::Set(param.description),
            amenities: ActiveValue::Set(param.amenities.to_storage()),
            status: ActiveValue::Set(RoomStatus::Available),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Fetches a room by id. Soft-deleted rooms are treated as absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id)
            .filter(entity::room::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Fetches a room by id regardless of soft deletion. Used when joining
    /// historical bookings and payments to a room that has since been
    /// retired from the catalog.
    pub async fn get_by_id_with_deleted(
        &self,
        id: i32,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    /// Looks a room up by its number, soft-deleted rows included — the
    /// number stays reserved even after a deletion.
    pub async fn find_by_number(
        &self,
        room_number: &str,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await
    }

    /// Lists live rooms, paginated, in room-number order.
    ///
    /// # Returns
    /// - `Ok((rooms, total))`: one page of rooms and the total live count
    /// - `Err(DbErr)`: database error
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::room::Model>, u64), DbErr> {
        let paginator = entity::prelude::Room::find()
            .filter(entity::room::Column::DeletedAt.is_null())
            .order_by_asc(entity::room::Column::RoomNumber)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rooms = paginator.fetch_page(page).await?;

        Ok((rooms, total))
    }

    /// Applies a partial update to a live room.
    ///
    /// # Returns
    /// - `Ok(Some(room))`: the updated room
    /// - `Ok(None)`: no live room with that id
    /// - `Err(DbErr)`: database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateRoomParam,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = room.into();

        if let Some(kind) = param.kind {
            active.kind = ActiveValue::Set(kind);
        }
        if let Some(price) = param.price_per_night {
            active.price_per_night = ActiveValue::Set(price);
        }
        if let Some(max_guests) = param.max_guests {
            active.max_guests = ActiveValue::Set(max_guests);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(amenities) = param.amenities {
            active.amenities = ActiveValue::Set(amenities.to_storage());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Sets the administrative status of a live room.
    pub async fn set_status(
        &self,
        id: i32,
        status: RoomStatus,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = room.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Marks a room deleted, keeping the row (and its booking history) in
    /// storage. Subsequent lookups by id behave as if the room were gone.
    ///
    /// # Returns
    /// - `Ok(true)`: the room existed and is now marked deleted
    /// - `Ok(false)`: no live room with that id
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(room) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::room::ActiveModel = room.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Availability search: live rooms whose administrative status is
    /// `available`, which pass every supplied static filter, and which have
    /// no non-cancelled booking overlapping the requested stay.
    ///
    /// The booking-conflict filter is a `NOT IN` sub-select producing one
    /// row per overlapping booking; filtering on it keeps each qualifying
    /// room in the result exactly once. Two half-open intervals overlap iff
    /// each starts before the other ends, so the predicate is
    /// `booking.check_in < stay.check_out AND booking.check_out >
    /// stay.check_in` — a booking that ends exactly when the stay begins
    /// does not match.
    ///
    /// Results are ordered by the requested sort column (id as tie break),
    /// or by id alone when no sort is requested, so identical calls against
    /// unchanged data return identical sequences. The amenity filter is not
    /// applied here; it operates on the decoded tag set in the service
    /// layer.
    pub async fn search_available(
        &self,
        criteria: &RoomSearchCriteria,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(RoomStatus::Available))
            .filter(entity::room::Column::DeletedAt.is_null());

        if let Some(kind) = criteria.kind {
            query = query.filter(entity::room::Column::Kind.eq(kind));
        }
        if let Some(guests) = criteria.guests {
            query = query.filter(entity::room::Column::MaxGuests.gte(guests));
        }
        if let Some(min_price) = criteria.min_price {
            query = query.filter(entity::room::Column::PricePerNight.gte(min_price));
        }
        if let Some(max_price) = criteria.max_price {
            query = query.filter(entity::room::Column::PricePerNight.lte(max_price));
        }

        let conflicting_rooms = Query::select()
            .column(entity::booking::Column::RoomId)
            .from(entity::booking::Entity)
            .cond_where(
                Condition::all()
                    .add(
                        Expr::col(entity::booking::Column::Status)
                            .ne(entity::enums::BookingStatus::Cancelled),
                    )
                    .add(Expr::col(entity::booking::Column::CheckIn).lt(criteria.stay.check_out()))
                    .add(Expr::col(entity::booking::Column::CheckOut).gt(criteria.stay.check_in())),
            )
            .to_owned();

        query = query.filter(entity::room::Column::Id.not_in_subquery(conflicting_rooms));

        Self::apply_sort(query, criteria).all(self.db).await
    }

    fn apply_sort(
        query: Select<entity::room::Entity>,
        criteria: &RoomSearchCriteria,
    ) -> Select<entity::room::Entity> {
        let Some(field) = criteria.sort_by else {
            return query.order_by_asc(entity::room::Column::Id);
        };

        let column = match field {
            SortField::Price => entity::room::Column::PricePerNight,
            SortField::Kind => entity::room::Column::Kind,
            SortField::MaxGuests => entity::room::Column::MaxGuests,
            SortField::RoomNumber => entity::room::Column::RoomNumber,
        };

        let query = match criteria.sort_order {
            SortOrder::Asc => query.order_by_asc(column),
            SortOrder::Desc => query.order_by_desc(column),
        };

        query.order_by_asc(entity::room::Column::Id)
    }
}
