//! # vms_api
//!
//! HTTP API library for the vehicle registration service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use vms_core::auth::jwt::TokenCodec;

use crate::config::ApiConfig;
use crate::handlers::{auth, health, owners};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// Session token codec, shared by login and the auth middleware.
    pub codec: TokenCodec,
}

impl AppState {
    /// Build state from a pool and config, deriving the token codec from
    /// the configured JWT secret and TTL.
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        let codec = TokenCodec::with_ttl(config.jwt_secret.as_bytes(), config.token_ttl_secs);
        Self {
            pool,
            config,
            codec,
        }
    }
}

/// Run embedded database migrations.
///
/// Delegates to `vms_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    vms_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/auth/signup", post(auth::signup_handler))
        .route("/api/auth/login", post(auth::login_handler));

    // Protected routes (require a valid session token)
    let protected = Router::new()
        .route(
            "/api/owners",
            post(owners::register_owner_handler).get(owners::list_owners_handler),
        )
        .route("/api/owners/search", get(owners::search_owner_handler))
        .route(
            "/api/owners/{owner_id}/plate",
            post(owners::register_plate_handler),
        )
        .route(
            "/api/owners/{owner_id}/plates",
            get(owners::list_plates_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
