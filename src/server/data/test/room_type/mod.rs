use crate::server::{
    data::room_type::RoomTypeRepository,
    model::room_type::{CreateRoomTypeParam, UpdateRoomTypeParam},
};
use entity::enums::RoomKind;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
