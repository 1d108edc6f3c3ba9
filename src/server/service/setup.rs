//! One-time setup codes for bootstrapping the first admin account.
//!
//! When the server starts with no admin account in the database, a random
//! code is generated and written to the log. Registering with that code
//! promotes the new account to admin. Codes live in memory only, expire
//! after ten minutes, and are consumed on first successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const SETUP_CODE_TTL_SECONDS: u64 = 600;
const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory store for the current setup code, shared across request
/// handlers through the application state.
#[derive(Clone, Default)]
pub struct SetupCodeService {
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and stores a fresh code, replacing any previous one.
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(SetupCode::new(code_string.clone()));
        code_string
    }

    /// Validates the provided code. A matching, unexpired code is consumed
    /// so it can only ever promote one account; expired codes are cleared
    /// on the way.
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored) = code.as_ref() {
            if stored.is_expired() {
                *code = None;
                return false;
            }

            if stored.code == input_code {
                *code = None;
                return true;
            }
        }

        false
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored) = code.as_ref() {
            if stored.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}
