//! Authentication and authorization logic.
//!
//! Provides the session token codec, password hashing, credential lookup
//! and the login/authorize service shared by the API layer.

pub mod jwt;
pub mod password;
pub mod queries;
pub mod service;
pub mod store;

use thiserror::Error;

use crate::auth::jwt::TokenError;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown identifier or wrong password. The two cases are merged on
    /// purpose so callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
