pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_user_table;
mod m20260715_000002_create_refresh_token_table;
mod m20260715_000003_create_room_type_table;
mod m20260715_000004_create_room_table;
mod m20260716_000005_create_booking_table;
mod m20260716_000006_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_user_table::Migration),
            Box::new(m20260715_000002_create_refresh_token_table::Migration),
            Box::new(m20260715_000003_create_room_type_table::Migration),
            Box::new(m20260715_000004_create_room_table::Migration),
            Box::new(m20260716_000005_create_booking_table::Migration),
            Box::new(m20260716_000006_create_payment_table::Migration),
        ]
    }
}
