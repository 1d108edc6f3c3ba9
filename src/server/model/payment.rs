//! Payment domain models and the payment status machine.

use chrono::{DateTime, Utc};
use entity::enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;

use crate::model::payment::{PaymentDto, PaymentMethodDto, PaymentStatusDto};

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Card => Self::Card,
            PaymentMethod::Cash => Self::Cash,
            PaymentMethod::Transfer => Self::Transfer,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(value: PaymentMethodDto) -> Self {
        match value {
            PaymentMethodDto::Card => Self::Card,
            PaymentMethodDto::Cash => Self::Cash,
            PaymentMethodDto::Transfer => Self::Transfer,
        }
    }
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Refunded => Self::Refunded,
            PaymentStatus::Failed => Self::Failed,
        }
    }
}

impl From<PaymentStatusDto> for PaymentStatus {
    fn from(value: PaymentStatusDto) -> Self {
        match value {
            PaymentStatusDto::Pending => Self::Pending,
            PaymentStatusDto::Paid => Self::Paid,
            PaymentStatusDto::Refunded => Self::Refunded,
            PaymentStatusDto::Failed => Self::Failed,
        }
    }
}

/// True when a payment may move from `from` to `to`: a pending payment
/// settles as paid or failed, a paid payment may be refunded, and a failed
/// payment may be retried back through pending.
pub fn transition_allowed(from: PaymentStatus, to: PaymentStatus) -> bool {
    matches!(
        (from, to),
        (PaymentStatus::Pending, PaymentStatus::Paid)
            | (PaymentStatus::Pending, PaymentStatus::Failed)
            | (PaymentStatus::Paid, PaymentStatus::Refunded)
            | (PaymentStatus::Failed, PaymentStatus::Pending)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub booking_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            amount: entity.amount,
            method: entity.method,
            status: entity.status,
            paid_at: entity.paid_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            booking_id: self.booking_id,
            amount: self.amount,
            method: self.method.into(),
            status: self.status.into(),
            paid_at: self.paid_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub booking_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
}
