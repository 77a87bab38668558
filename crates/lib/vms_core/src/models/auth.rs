//! Authentication domain models.
//!
//! These are internal domain models, distinct from API-layer DTOs
//! (which have `#[serde(rename)]` for camelCase etc.).

use serde::{Deserialize, Serialize};

/// Domain user. The password hash is deliberately kept off this struct so it
/// can never leak through a response path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub role: String,
}

/// User plus password hash, for internal credential checks only.
#[derive(Debug, Clone)]
pub struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}

/// JWT claims embedded in session tokens.
///
/// A fixed, typed claim set: subject (user email), role, issued-at and
/// expiry as unix timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user email (standard JWT `sub` claim).
    pub sub: String,
    /// User role (`"ADMIN"` or `"STANDARD"`).
    pub role: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}
