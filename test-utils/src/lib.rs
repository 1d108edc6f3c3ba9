//! Shared testing utilities for the booking back end.
//!
//! Provides a builder pattern for creating test contexts with in-memory
//! SQLite databases plus entity factories with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring test environments
//! - **TestContext**: test environment holding the database connection
//! - **TestError**: errors that can occur during test setup
//! - **factory**: per-entity factories (`create_user`, `RoomFactory`, ...)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_room_operations() {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
