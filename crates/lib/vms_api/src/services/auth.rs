//! Authentication service — signup/login flows delegating to `vms_core::auth`.

use sqlx::PgPool;
use tracing::{info, warn};
use vms_core::auth::jwt::TokenCodec;
use vms_core::auth::service::AuthService;
use vms_core::auth::store::PgCredentialStore;
use vms_core::auth::{password, queries};
use vms_core::validation;

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, SignupRequest, SignupResponse};

/// Register a new user account.
pub async fn signup(pool: &PgPool, req: &SignupRequest) -> AppResult<SignupResponse> {
    validation::validate_name(&req.name)?;
    validation::validate_email(&req.email)?;
    validation::validate_phone(&req.phone)?;
    validation::validate_national_id(&req.national_id)?;
    validation::validate_password(&req.password)?;
    validation::validate_role(&req.role)?;

    if queries::email_exists(pool, &req.email).await? {
        warn!(email = %req.email, "signup attempt with duplicate email");
        return Err(AppError::Validation("Email already exists".into()));
    }
    if queries::national_id_exists(pool, &req.national_id).await? {
        warn!("signup attempt with duplicate national ID");
        return Err(AppError::Validation("National ID already exists".into()));
    }

    let password_hash = password::hash_password(&req.password)?;
    queries::create_user(
        pool,
        &req.name,
        &req.email,
        &req.phone,
        &req.national_id,
        &req.role,
        &password_hash,
    )
    .await?;
    info!(email = %req.email, "user registered successfully");

    Ok(SignupResponse {
        message: "User registered successfully".into(),
        email: req.email.clone(),
        name: req.name.clone(),
        role: req.role.clone(),
    })
}

/// Authenticate with email + password, returning a session token.
pub async fn login(
    pool: &PgPool,
    codec: &TokenCodec,
    email: &str,
    password: &str,
) -> AppResult<LoginResponse> {
    let service = AuthService::new(PgCredentialStore::new(pool.clone()), codec.clone());
    let token = service.login(email, password).await?;

    Ok(LoginResponse {
        message: "Login successful".into(),
        token,
    })
}
