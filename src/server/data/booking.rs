//! Booking ledger repository.

use chrono::{DateTime, Utc};
use entity::enums::BookingStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use crate::server::model::booking::{CreateBookingParam, ListBookingsParam, StayInterval};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking only if the room is still free for the stay,
    /// re-running the conflict check and inserting inside one transaction
    /// so a concurrent overlapping request cannot slip between the check
    /// and the commit.
    ///
    /// # Returns
    /// - `Ok(Some(booking))`: the room was free, booking created as pending
    /// - `Ok(None)`: a non-cancelled booking overlaps the stay
    /// - `Err(DbErr)`: database error
    pub async fn create_if_free(
        &self,
        param: CreateBookingParam,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let result = self
            .db
            .transaction::<_, Option<entity::booking::Model>, DbErr>(|txn| {
                Box::pin(async move {
                    let conflict = entity::prelude::Booking::find()
                        .filter(entity::booking::Column::RoomId.eq(param.room_id))
                        .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
                        .filter(entity::booking::Column::CheckIn.lt(param.stay.check_out()))
                        .filter(entity::booking::Column::CheckOut.gt(param.stay.check_in()))
                        .one(txn)
                        .await?;

                    if conflict.is_some() {
                        return Ok(None);
                    }

                    let now = Utc::now();
                    let booking = entity::booking::ActiveModel {
                        room_id: ActiveValue::Set(param.room_id),
                        user_id: ActiveValue::Set(param.user_id),
                        check_in: ActiveValue::Set(param.stay.check_in()),
                        check_out: ActiveValue::Set(param.stay.check_out()),
                        guests: ActiveValue::Set(param.guests),
                        status: ActiveValue::Set(BookingStatus::Pending),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    Ok(Some(booking))
                })
            })
            .await;

        match result {
            Ok(created) => Ok(created),
            Err(TransactionError::Connection(e)) => Err(e),
            Err(TransactionError::Transaction(e)) => Err(e),
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Non-cancelled bookings on a room overlapping the given stay,
    /// optionally ignoring one booking id (used when rescheduling).
    ///
    /// Overlap is the half-open interval predicate: a booking conflicts iff
    /// it starts before the stay ends and ends after the stay starts.
    pub async fn find_conflicts(
        &self,
        room_id: i32,
        stay: &StayInterval,
        exclude_booking_id: Option<i32>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
            .filter(entity::booking::Column::CheckIn.lt(stay.check_out()))
            .filter(entity::booking::Column::CheckOut.gt(stay.check_in()));

        if let Some(exclude_id) = exclude_booking_id {
            query = query.filter(entity::booking::Column::Id.ne(exclude_id));
        }

        query
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Pages through the ledger, optionally narrowed to one room and/or one
    /// user, newest stays first.
    pub async fn list(
        &self,
        param: &ListBookingsParam,
    ) -> Result<(Vec<entity::booking::Model>, u64), DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(room_id) = param.room_id {
            query = query.filter(entity::booking::Column::RoomId.eq(room_id));
        }
        if let Some(user_id) = param.user_id {
            query = query.filter(entity::booking::Column::UserId.eq(user_id));
        }

        let paginator = query
            .order_by_desc(entity::booking::Column::CheckIn)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator.fetch_page(param.page).await?;

        Ok((bookings, total))
    }

    /// Full booking history of one room in check-in order.
    pub async fn list_for_room(
        &self,
        room_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Sets the status of a booking.
    ///
    /// # Returns
    /// - `Ok(Some(booking))`: updated
    /// - `Ok(None)`: no booking with that id
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let Some(booking) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Housekeeping: marks every confirmed booking whose checkout has
    /// passed as completed. Returns the number of bookings closed.
    pub async fn complete_past(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::CheckOut.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
