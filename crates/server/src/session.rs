// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer token extraction for protected routes.
//!
//! The extractor verifies the token at the server boundary so that handlers
//! only ever see an [`AuthenticatedAccount`].

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use results_portal_api::{ApiError, AuthenticatedAccount, CredentialService};
use tracing::{debug, error, warn};

use crate::{AppState, HttpError};

/// Extractor for requests carrying a valid bearer token.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionAccount(account): SessionAccount,
/// ) -> Result<Json<Response>, HttpError> {
///     // account: AuthenticatedAccount
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the `Authorization` header is missing, is not
/// valid UTF-8, or carries no bearer token, and with HTTP 403 if the token
/// fails verification.
pub struct SessionAccount(pub AuthenticatedAccount);

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingToken
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::MissingToken
            })?;

        let token: &str = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                warn!("Authorization header carries no bearer token");
                SessionError::MissingToken
            })?;

        let account: AuthenticatedAccount = CredentialService::authenticate(&state.tokens, token)
            .map_err(|e| match e {
                ApiError::InvalidToken { reason } => {
                    warn!(%reason, "Token verification failed");
                    SessionError::InvalidToken
                }
                other => {
                    error!(error = %other, "Token verification error");
                    SessionError::Internal(other.to_string())
                }
            })?;

        debug!(
            account_id = account.account_id,
            username = %account.username,
            "Token verified"
        );

        Ok(Self(account))
    }
}

/// Token extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// No usable bearer token was presented.
    MissingToken,
    /// The token is malformed, forged or expired.
    InvalidToken,
    /// Verification could not be carried out.
    Internal(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                String::from("Access token required"),
            ),
            Self::InvalidToken => (
                StatusCode::FORBIDDEN,
                String::from("Invalid or expired token"),
            ),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        HttpError { status, message }.into_response()
    }
}
