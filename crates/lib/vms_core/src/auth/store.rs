//! Credential store seam.
//!
//! The authentication service looks users up through this trait so the
//! login flow can be exercised against an in-memory store in tests while
//! production uses PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{AuthError, queries};
use crate::models::auth::UserWithPassword;

/// User lookup by unique identifier.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserWithPassword>, AuthError>;

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<UserWithPassword>, AuthError>;
}

/// PostgreSQL-backed credential store.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserWithPassword>, AuthError> {
        queries::find_user_by_email(&self.pool, email).await
    }

    async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<UserWithPassword>, AuthError> {
        queries::find_user_by_national_id(&self.pool, national_id).await
    }
}
