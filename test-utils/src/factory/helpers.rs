use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Monotonic counter so factory defaults (emails, room numbers) never
/// collide within a test process.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates the rows a booking depends on: one guest account and one room.
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::room::Model), DbErr> {
    let user = super::user::create_user(db).await?;
    let room = super::room::create_room(db).await?;

    Ok((user, room))
}
