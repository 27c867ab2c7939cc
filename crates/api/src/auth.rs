// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential handling: password hashing, registration, login and token
//! verification.

use results_portal_domain::{
    DEFAULT_ROLE, RollNumber, validate_login_fields, validate_registration_fields,
};
use results_portal_persistence::{AccountData, CreatedAccount, NewAccount, Persistence};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::token::{SessionClaims, TokenConfig, issue_token, verify_token};

/// bcrypt work factor applied to every stored password.
pub const PASSWORD_HASH_COST: u32 = 10;

/// An account whose bearer token has been verified.
///
/// Results are always scoped by `account_id` taken from here, never from
/// client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// The account identifier embedded in the token.
    pub account_id: i64,
    pub username: String,
    pub role: String,
}

impl AuthenticatedAccount {
    #[must_use]
    pub const fn new(account_id: i64, username: String, role: String) -> Self {
        Self {
            account_id,
            username,
            role,
        }
    }
}

impl From<SessionClaims> for AuthenticatedAccount {
    fn from(claims: SessionClaims) -> Self {
        Self::new(claims.id, claims.username, claims.role)
    }
}

/// Hashes a password with bcrypt at [`PASSWORD_HASH_COST`].
///
/// # Errors
///
/// Returns `ApiError::Internal` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, PASSWORD_HASH_COST).map_err(|e| ApiError::Internal {
        message: format!("Failed to hash password: {e}"),
    })
}

/// Compares a plaintext password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, ApiError> {
    bcrypt::verify(password, password_hash).map_err(|e| ApiError::Internal {
        message: format!("Failed to verify password: {e}"),
    })
}

/// Input for [`CredentialService::register`].
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    /// Display name. Falls back to the username when absent or blank.
    pub name: Option<&'a str>,
    /// Roll number. Derived from the new account id when absent or blank.
    pub roll_number: Option<&'a str>,
}

/// Registration, login and token verification.
pub struct CredentialService;

impl CredentialService {
    /// Registers a new account and its student profile.
    ///
    /// No token is issued; the client logs in afterwards.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if username, email or password is missing, or the
    ///   supplied roll number is malformed
    /// - `Conflict` if the email or username is taken, or a unique
    ///   constraint trips during insert
    /// - `Internal` on hashing or store failure
    pub fn register(
        persistence: &mut Persistence,
        registration: &Registration<'_>,
    ) -> Result<CreatedAccount, ApiError> {
        validate_registration_fields(
            registration.username,
            registration.email,
            registration.password,
        )?;

        let username: &str = registration.username.trim();
        let email: &str = registration.email.trim();

        if let Some(existing) = persistence.find_account_by_email_or_username(email, username)? {
            debug!(
                account_id = existing.account_id,
                "Registration rejected: account already exists"
            );
            return Err(ApiError::Conflict {
                message: String::from("User already exists"),
            });
        }

        let roll_number: Option<RollNumber> = registration
            .roll_number
            .filter(|value| !value.trim().is_empty())
            .map(RollNumber::new)
            .transpose()?;

        let name: &str = registration
            .name
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(username);

        let password_hash: String = hash_password(registration.password)?;

        let created: CreatedAccount = persistence.create_account_with_profile(&NewAccount {
            username,
            email,
            password_hash: &password_hash,
            role: DEFAULT_ROLE,
            name,
            roll_number: roll_number.as_ref(),
        })?;

        info!(
            account_id = created.account_id,
            username, "Registered new account"
        );

        Ok(created)
    }

    /// Verifies credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if email or password is missing
    /// - `NotFound` if no account has that email
    /// - `InvalidCredentials` if the password does not match
    /// - `Internal` on store, hashing or signing failure
    pub fn login(
        persistence: &mut Persistence,
        tokens: &TokenConfig,
        email: &str,
        password: &str,
    ) -> Result<(String, AccountData), ApiError> {
        validate_login_fields(email, password)?;

        let account: AccountData = persistence
            .find_account_by_email(email.trim())?
            .ok_or_else(|| ApiError::NotFound {
                message: String::from("User not found"),
            })?;

        if !verify_password(password, &account.password_hash)? {
            warn!(account_id = account.account_id, "Login rejected: bad password");
            return Err(ApiError::InvalidCredentials);
        }

        let token: String = issue_token(&account, tokens)?;

        info!(account_id = account.account_id, "Login succeeded");

        Ok((token, account))
    }

    /// Verifies a bearer token and returns the account it identifies.
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` for malformed, forged or expired tokens and
    /// `Internal` for key failures.
    pub fn authenticate(
        tokens: &TokenConfig,
        token: &str,
    ) -> Result<AuthenticatedAccount, ApiError> {
        let claims: SessionClaims = verify_token(token, tokens)?;
        Ok(AuthenticatedAccount::from(claims))
    }
}
