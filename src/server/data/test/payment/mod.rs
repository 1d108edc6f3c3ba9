use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParam};
use chrono::Utc;
use entity::enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_status;
