use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Add entity tables in dependency order (referenced tables first), then
/// call `build()` to get a context with an in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity table, generated from the SeaORM entity with SQLite
    /// syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for room catalog tests: User, RoomType, Room.
    pub fn with_room_tables(self) -> Self {
        self.with_table(User).with_table(RoomType).with_table(Room)
    }

    /// Adds the tables needed for booking tests: the room tables plus
    /// Booking.
    pub fn with_booking_tables(self) -> Self {
        self.with_room_tables().with_table(Booking)
    }

    /// Adds the tables needed for payment tests: the booking tables plus
    /// Payment.
    pub fn with_payment_tables(self) -> Self {
        self.with_booking_tables().with_table(Payment)
    }

    /// Adds the tables needed for authentication tests: User and
    /// RefreshToken.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(RefreshToken)
    }

    /// Creates the test context and applies the configured schema.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
