//! API server configuration.

use vms_core::auth::jwt::{SESSION_TOKEN_TTL_SECS, resolve_jwt_secret};

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3200").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    pub token_ttl_secs: i64,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default                                |
    /// |-------------------|----------------------------------------|
    /// | `BIND_ADDR`       | `127.0.0.1:3200`                       |
    /// | `DATABASE_URL`    | `postgres://localhost:5432/vms`        |
    /// | `JWT_SECRET`      | generated & persisted to file          |
    /// | `TOKEN_TTL_SECS`  | `86400` (24 hours)                     |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3200".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/vms".into()),
            jwt_secret: resolve_jwt_secret(),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SESSION_TOKEN_TTL_SECS),
        }
    }
}
