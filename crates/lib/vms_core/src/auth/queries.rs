//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::{User, UserWithPassword};

type UserRow = (i64, String, String, String, String, String, String);

fn row_to_user(row: UserRow) -> UserWithPassword {
    let (id, name, email, phone, national_id, role, password_hash) = row;
    UserWithPassword {
        user: User {
            id,
            name,
            email,
            phone,
            national_id,
            role,
        },
        password_hash,
    }
}

/// Fetch a user (with password hash) by email.
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, phone, national_id, role, password_hash \
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(row_to_user))
}

/// Fetch a user (with password hash) by national ID.
pub async fn find_user_by_national_id(
    pool: &PgPool,
    national_id: &str,
) -> Result<Option<UserWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, phone, national_id, role, password_hash \
         FROM users WHERE national_id = $1",
    )
    .bind(national_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(row_to_user))
}

/// Create a new user, returning the user ID.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    phone: &str,
    national_id: &str,
    role: &str,
    password_hash: &str,
) -> Result<i64, AuthError> {
    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, phone, national_id, role, password_hash) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(national_id)
    .bind(role)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user_id)
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Check whether a national ID is already registered.
pub async fn national_id_exists(pool: &PgPool, national_id: &str) -> Result<bool, AuthError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE national_id = $1)",
    )
    .bind(national_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}
