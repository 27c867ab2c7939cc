// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JWT session token creation and verification.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use results_portal_persistence::AccountData;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::error::ApiError;

/// Signing settings for session tokens.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    lifetime: Duration,
}

impl TokenConfig {
    /// Tokens expire this long after issuance unless overridden.
    pub const DEFAULT_LIFETIME: Duration = Duration::hours(24);

    /// Creates a config signing with `secret` and the default 24h lifetime.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            lifetime: Self::DEFAULT_LIFETIME,
        }
    }

    /// Overrides the token lifetime.
    #[must_use]
    pub const fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Returns the token lifetime.
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

/// Claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account identifier.
    pub id: i64,
    pub username: String,
    pub role: String,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expiry (unix seconds).
    pub exp: i64,
}

impl SessionClaims {
    /// Builds claims for `account` issued at `issued_at`.
    #[must_use]
    pub fn new(account: &AccountData, config: &TokenConfig, issued_at: OffsetDateTime) -> Self {
        let expires_at: OffsetDateTime = issued_at + config.lifetime;
        Self {
            id: account.account_id,
            username: account.username.clone(),
            role: account.role.clone(),
            iat: issued_at.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        }
    }
}

/// Signs `claims` with the configured secret (HS256).
///
/// # Errors
///
/// Returns `ApiError::Internal` if encoding fails.
pub fn encode_claims(claims: &SessionClaims, config: &TokenConfig) -> Result<String, ApiError> {
    let key = EncodingKey::from_secret(config.secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &key).map_err(|e| ApiError::Internal {
        message: format!("create JWT: {e}"),
    })
}

/// Issues a token for `account` valid from now for the configured lifetime.
///
/// # Errors
///
/// Returns `ApiError::Internal` if encoding fails.
pub fn issue_token(account: &AccountData, config: &TokenConfig) -> Result<String, ApiError> {
    let claims = SessionClaims::new(account, config, OffsetDateTime::now_utc());
    encode_claims(&claims, config)
}

/// Verifies a token's signature and expiry and returns its claims.
///
/// Expiry is checked with zero leeway.
///
/// # Errors
///
/// Returns `ApiError::InvalidToken` for malformed, forged or expired tokens
/// and `ApiError::Internal` for key or crypto failures.
pub fn verify_token(token: &str, config: &TokenConfig) -> Result<SessionClaims, ApiError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<SessionClaims>(token, &key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::ExpiredSignature
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidSubject
            | ErrorKind::ImmatureSignature
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_)
            | ErrorKind::InvalidAlgorithm => ApiError::InvalidToken {
                reason: e.to_string(),
            },
            _ => ApiError::Internal {
                message: format!("JWT verification: {e}"),
            },
        }
    })?;

    Ok(token_data.claims)
}
