//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's
//! state extraction. Every field is cheap to clone: the database connection
//! is a pooled handle, the token service holds small cloneable keys, and
//! the setup code service is an `Arc` around the in-memory code.

use sea_orm::DatabaseConnection;

use super::service::{auth::token::TokenService, setup::SetupCodeService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies access tokens.
    pub tokens: TokenService,

    /// One-time setup codes for bootstrapping the first admin account.
    pub setup_codes: SetupCodeService,

    /// Lifetime of newly issued refresh tokens, in days.
    pub refresh_token_ttl_days: i64,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        setup_codes: SetupCodeService,
        refresh_token_ttl_days: i64,
    ) -> Self {
        Self {
            db,
            tokens,
            setup_codes,
            refresh_token_ttl_days,
        }
    }
}
