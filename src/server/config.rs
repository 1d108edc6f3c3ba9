use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ACCESS_TTL_SECS: i64 = 900;
const DEFAULT_REFRESH_TTL_DAYS: i64 = 30;

pub struct Config {
    pub database_url: String,

    pub bind: String,
    pub port: u16,

    /// Secret used to sign access tokens. Must be set; there is no
    /// development default on purpose.
    pub jwt_secret: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind: std::env::var("BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            port: match std::env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: raw,
                })?,
                Err(_) => DEFAULT_PORT,
            },
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            access_token_ttl_secs: parse_or_default(
                "ACCESS_TOKEN_TTL_SECS",
                DEFAULT_ACCESS_TTL_SECS,
            )?,
            refresh_token_ttl_days: parse_or_default(
                "REFRESH_TOKEN_TTL_DAYS",
                DEFAULT_REFRESH_TTL_DAYS,
            )?,
        })
    }
}

fn parse_or_default(name: &str, default: i64) -> Result<i64, AppError> {
    match std::env::var(name) {
        Ok(raw) => Ok(raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw,
        })?),
        Err(_) => Ok(default),
    }
}
