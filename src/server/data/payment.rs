//! Payment repository.

use chrono::{DateTime, Utc};
use entity::enums::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::payment::CreatePaymentParam;

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePaymentParam) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();

        entity::payment::ActiveModel {
            booking_id: ActiveValue::Set(param.booking_id),
            amount: ActiveValue::Set(param.amount),
            method: ActiveValue::Set(param.method),
            status: ActiveValue::Set(PaymentStatus::Pending),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find_by_id(id).one(self.db).await
    }

    pub async fn list_for_booking(
        &self,
        booking_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the payment status, stamping `paid_at` when given.
    pub async fn update_status(
        &self,
        id: i32,
        status: PaymentStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        let Some(payment) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::payment::ActiveModel = payment.into();
        active.status = ActiveValue::Set(status);
        if paid_at.is_some() {
            active.paid_at = ActiveValue::Set(paid_at);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }
}
