//! Session token codec — JWT generation and verification.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use thiserror::Error;
use tracing::info;

use crate::models::auth::TokenClaims;

/// Session token lifetime: 24 hours.
pub const SESSION_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Token codec errors, one variant per failure mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token subject must not be empty")]
    EmptySubject,

    #[error("token is structurally malformed")]
    Malformed,

    #[error("token signature verification failed")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// Time source used for issue and expiry checks.
///
/// Injected so expiry tests can run against a fixed clock instead of racing
/// the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Encodes and verifies HS256 session tokens.
///
/// Holds the symmetric signing key, the token lifetime and the time source.
/// Read-only after construction; cheap to clone and safe to share across
/// concurrent requests.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Codec with the default 24 hour lifetime and the system clock.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, SESSION_TOKEN_TTL_SECS)
    }

    /// Codec with an explicit token lifetime in seconds.
    pub fn with_ttl(secret: &[u8], ttl_secs: i64) -> Self {
        Self::with_clock(secret, ttl_secs, Arc::new(SystemClock))
    }

    /// Codec with an explicit lifetime and time source.
    pub fn with_clock(secret: &[u8], ttl_secs: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_secs,
            clock,
        }
    }

    /// Issue a signed session token for `subject` carrying a role claim.
    ///
    /// `iat` is the current clock reading, `exp` is `iat` plus the configured
    /// lifetime. Pure computation, no I/O.
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::EmptySubject);
        }
        let now = self.clock.now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(format!("jwt encode: {e}")))
    }

    /// Verify the signature and decode the claims.
    ///
    /// Does not reject on expiry — expiry is layered explicitly via
    /// [`is_expired`](Self::is_expired) or [`verify`](Self::verify).
    pub fn parse_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })
    }

    /// Subject (user email) of a token.
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.parse_claims(token)?.sub)
    }

    /// Role claim of a token.
    pub fn extract_role(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.parse_claims(token)?.role)
    }

    /// Whether already-parsed claims are past their expiry.
    ///
    /// A token is expired once the clock reaches `exp`, so a token issued
    /// with a zero lifetime is expired immediately while a fresh token with
    /// a positive lifetime never is.
    pub fn claims_expired(&self, claims: &TokenClaims) -> bool {
        self.clock.now().timestamp() >= claims.exp
    }

    /// Whether a token is past its expiry. Fails if the token does not
    /// parse or carries a bad signature.
    pub fn is_expired(&self, token: &str) -> Result<bool, TokenError> {
        let claims = self.parse_claims(token)?;
        Ok(self.claims_expired(&claims))
    }

    /// Full verification: signature, structure and expiry.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = self.parse_claims(token)?;
        if self.claims_expired(&claims) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

/// Resolve the JWT secret: env var `JWT_SECRET` → persisted file.
///
/// The secret is deliberately sourced from configuration rather than
/// regenerated per process, so tokens issued before a restart stay valid.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = jwt_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new JWT secret");
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vms")
        .join("jwt-secret")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{Duration, TimeZone};

    use super::*;

    const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-testing-minimum-32-chars";

    /// Settable clock for deterministic expiry tests.
    struct FixedClock(Mutex<DateTime<Utc>>);

    impl FixedClock {
        fn at(t: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self(Mutex::new(t)))
        }

        fn advance(&self, by: Duration) {
            let mut t = self.0.lock().unwrap();
            *t += by;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn issue_and_parse_round_trips_subject_and_role() {
        let codec = TokenCodec::new(TEST_SECRET);
        let token = codec.issue("alice@example.com", "ADMIN").unwrap();

        let claims = codec.parse_claims(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.exp, claims.iat + SESSION_TOKEN_TTL_SECS);

        assert_eq!(codec.extract_subject(&token).unwrap(), "alice@example.com");
        assert_eq!(codec.extract_role(&token).unwrap(), "ADMIN");
    }

    #[test]
    fn issue_rejects_empty_subject() {
        let codec = TokenCodec::new(TEST_SECRET);
        assert_eq!(codec.issue("", "ADMIN"), Err(TokenError::EmptySubject));
    }

    #[test]
    fn fresh_token_is_not_expired() {
        let codec = TokenCodec::new(TEST_SECRET);
        let token = codec.issue("alice@example.com", "ADMIN").unwrap();
        assert!(!codec.is_expired(&token).unwrap());
    }

    #[test]
    fn zero_ttl_token_is_expired_immediately() {
        let clock = FixedClock::at(epoch());
        let codec = TokenCodec::with_clock(TEST_SECRET, 0, clock);
        let token = codec.issue("alice@example.com", "ADMIN").unwrap();
        assert!(codec.is_expired(&token).unwrap());
        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn token_expires_after_ttl_elapses() {
        let clock = FixedClock::at(epoch());
        let codec =
            TokenCodec::with_clock(TEST_SECRET, SESSION_TOKEN_TTL_SECS, clock.clone());
        let token = codec.issue("alice@example.com", "ADMIN").unwrap();

        assert!(!codec.is_expired(&token).unwrap());
        assert!(codec.verify(&token).is_ok());

        clock.advance(Duration::hours(24) + Duration::seconds(1));
        assert!(codec.is_expired(&token).unwrap());
        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let codec = TokenCodec::new(TEST_SECRET);
        let token = codec.issue("alice@example.com", "ADMIN").unwrap();

        // Flip one character of the signature segment to another base64url
        // character so the structure still decodes.
        let (head, sig) = token.rsplit_once('.').unwrap();
        let flipped = if sig.starts_with('A') { 'B' } else { 'A' };
        let mut sig: Vec<char> = sig.chars().collect();
        sig[0] = flipped;
        let tampered = format!("{head}.{}", sig.into_iter().collect::<String>());

        assert_eq!(
            codec.parse_claims(&tampered),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn wrong_secret_is_rejected_as_invalid_signature() {
        let codec = TokenCodec::new(TEST_SECRET);
        let token = codec.issue("alice@example.com", "ADMIN").unwrap();

        let other = TokenCodec::new(b"another-secret-key-that-does-not-match-anything");
        assert_eq!(
            other.parse_claims(&token),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn garbage_input_is_malformed() {
        let codec = TokenCodec::new(TEST_SECRET);
        assert_eq!(
            codec.parse_claims("not-a-token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(codec.parse_claims(""), Err(TokenError::Malformed));
        assert_eq!(
            codec.parse_claims("a.b.c.d"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn two_issuances_at_different_instants_differ_but_both_verify() {
        let clock = FixedClock::at(epoch());
        let codec =
            TokenCodec::with_clock(TEST_SECRET, SESSION_TOKEN_TTL_SECS, clock.clone());

        let first = codec.issue("alice@example.com", "ADMIN").unwrap();
        clock.advance(Duration::seconds(5));
        let second = codec.issue("alice@example.com", "ADMIN").unwrap();

        assert_ne!(first, second);
        assert!(codec.verify(&first).is_ok());
        assert!(codec.verify(&second).is_ok());
    }
}
