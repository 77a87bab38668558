//! Authentication request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::services::auth;

/// `POST /api/auth/signup` — create a new user account.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    let resp = auth::signup(&state.pool, &body).await?;
    Ok(Json(resp))
}

/// `POST /api/auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(&state.pool, &state.codec, &body.email, &body.password).await?;
    Ok(Json(resp))
}
