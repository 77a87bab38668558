//! Authentication service — credential verification and token validation.

use tracing::{debug, info, warn};

use super::jwt::{TokenCodec, TokenError};
use super::store::CredentialStore;
use super::{AuthError, password};
use crate::models::auth::UserWithPassword;

/// Orchestrates login and request authorization over a credential store
/// and the token codec. Holds no mutable state of its own.
pub struct AuthService<S> {
    store: S,
    codec: TokenCodec,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: S, codec: TokenCodec) -> Self {
        Self { store, codec }
    }

    /// The codec this service issues and validates tokens with.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Authenticate with an identifier (email or national ID) and password,
    /// returning a signed session token on success.
    ///
    /// Unknown identifier and wrong password both surface as
    /// [`AuthError::InvalidCredentials`]; the distinction is logged only.
    /// The single lookup also provides the identity for the token, so a
    /// "authenticated but not found" state cannot arise.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String, AuthError> {
        let found = if identifier.contains('@') {
            self.store.find_by_email(identifier).await?
        } else {
            self.store.find_by_national_id(identifier).await?
        };

        let UserWithPassword {
            user,
            password_hash,
        } = match found {
            None => {
                warn!(identifier, "login rejected: unknown identifier");
                return Err(AuthError::InvalidCredentials);
            }
            Some(record) => record,
        };

        if !password::verify_password(password, &password_hash)? {
            warn!(identifier, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.issue(&user.email, &user.role)?;
        info!(email = %user.email, "login successful");
        Ok(token)
    }

    /// Whether `token` is a valid, unexpired session token for
    /// `expected_subject` (case-sensitive).
    ///
    /// Every failure collapses to `false`; the precise kind is logged so
    /// forged, expired and mismatched tokens stay distinguishable in traces.
    pub fn authorize(&self, token: &str, expected_subject: &str) -> bool {
        let claims = match self.codec.parse_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "authorization rejected");
                return false;
            }
        };
        if claims.sub != expected_subject {
            debug!(
                expected = expected_subject,
                actual = %claims.sub,
                "authorization rejected: subject mismatch"
            );
            return false;
        }
        if self.codec.claims_expired(&claims) {
            debug!(subject = %claims.sub, "authorization rejected: token expired");
            return false;
        }
        true
    }

    /// Role claim of a token.
    pub fn extract_role(&self, token: &str) -> Result<String, TokenError> {
        self.codec.extract_role(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;
    use crate::auth::jwt::{Clock, SESSION_TOKEN_TTL_SECS};
    use crate::models::auth::User;

    const TEST_SECRET: &[u8] = b"test-secret-key-for-service-tests-minimum-32c";

    struct MemoryStore {
        users: Vec<UserWithPassword>,
    }

    #[async_trait]
    impl CredentialStore for MemoryStore {
        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<UserWithPassword>, AuthError> {
            Ok(self.users.iter().find(|u| u.user.email == email).cloned())
        }

        async fn find_by_national_id(
            &self,
            national_id: &str,
        ) -> Result<Option<UserWithPassword>, AuthError> {
            Ok(self
                .users
                .iter()
                .find(|u| u.user.national_id == national_id)
                .cloned())
        }
    }

    struct FixedClock(Mutex<DateTime<Utc>>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn alice() -> UserWithPassword {
        UserWithPassword {
            user: User {
                id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
                phone: "0788000001".into(),
                national_id: "1199012345678901".into(),
                role: "ADMIN".into(),
            },
            password_hash: password::hash_password("s3cret-pass").unwrap(),
        }
    }

    fn service() -> AuthService<MemoryStore> {
        AuthService::new(
            MemoryStore {
                users: vec![alice()],
            },
            TokenCodec::new(TEST_SECRET),
        )
    }

    #[tokio::test]
    async fn login_then_authorize_succeeds() {
        let svc = service();
        let token = svc.login("alice@example.com", "s3cret-pass").await.unwrap();

        assert!(svc.authorize(&token, "alice@example.com"));
        assert_eq!(svc.extract_role(&token).unwrap(), "ADMIN");
    }

    #[tokio::test]
    async fn login_by_national_id_issues_token_for_email_subject() {
        let svc = service();
        let token = svc.login("1199012345678901", "s3cret-pass").await.unwrap();

        // Subject is always the email, whichever identifier was used.
        assert!(svc.authorize(&token, "alice@example.com"));
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_merge_to_invalid_credentials() {
        let svc = service();

        let err = svc.login("nouser@x.com", "anything").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = svc
            .login("alice@example.com", "not-the-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn authorize_rejects_wrong_subject() {
        let svc = service();
        let token = svc.login("alice@example.com", "s3cret-pass").await.unwrap();

        assert!(!svc.authorize(&token, "bob@example.com"));
        assert!(!svc.authorize(&token, "ALICE@EXAMPLE.COM"));
    }

    #[tokio::test]
    async fn authorize_rejects_garbage_and_forged_tokens() {
        let svc = service();
        assert!(!svc.authorize("not-a-token", "alice@example.com"));

        let forged = TokenCodec::new(b"some-entirely-different-signing-secret!!")
            .issue("alice@example.com", "ADMIN")
            .unwrap();
        assert!(!svc.authorize(&forged, "alice@example.com"));
    }

    #[tokio::test]
    async fn authorize_rejects_token_after_clock_passes_expiry() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let clock = Arc::new(FixedClock(Mutex::new(start)));
        let codec = TokenCodec::with_clock(TEST_SECRET, SESSION_TOKEN_TTL_SECS, clock.clone());
        let svc = AuthService::new(
            MemoryStore {
                users: vec![alice()],
            },
            codec,
        );

        let token = svc.login("alice@example.com", "s3cret-pass").await.unwrap();
        assert!(svc.authorize(&token, "alice@example.com"));

        *clock.0.lock().unwrap() = start + Duration::hours(24) + Duration::seconds(1);
        assert!(!svc.authorize(&token, "alice@example.com"));
        assert!(svc.codec().is_expired(&token).unwrap());
    }
}
