// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for the portal API.
//!
//! Handlers translate request DTOs into service calls and service results
//! into response DTOs. They are transport-agnostic: the server crate owns
//! HTTP concerns.

use results_portal_persistence::{AccountData, Persistence, ResultWithStudent, SemesterSummary};
use tracing::debug;

use crate::auth::{AuthenticatedAccount, CredentialService, Registration};
use crate::error::ApiError;
use crate::request_response::{
    LoginRequest, LoginResponse, PublicAccount, RegisterRequest, RegisterResponse,
    ResultResponse, SemesterSummaryResponse,
};
use crate::token::TokenConfig;

/// Registers a new account.
///
/// # Errors
///
/// Returns `InvalidInput`, `Conflict` or `Internal`; see
/// [`CredentialService::register`].
pub fn register(
    persistence: &mut Persistence,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    CredentialService::register(
        persistence,
        &Registration {
            username: &request.username,
            email: &request.email,
            password: &request.password,
            name: request.name.as_deref(),
            roll_number: request.roll_number.as_deref(),
        },
    )?;

    Ok(RegisterResponse {
        message: String::from("User registered successfully"),
    })
}

/// Logs in and returns a signed token with the public account view.
///
/// # Errors
///
/// Returns `InvalidInput`, `NotFound`, `InvalidCredentials` or `Internal`;
/// see [`CredentialService::login`].
pub fn login(
    persistence: &mut Persistence,
    tokens: &TokenConfig,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (token, account): (String, AccountData) =
        CredentialService::login(persistence, tokens, &request.email, &request.password)?;

    Ok(LoginResponse {
        token,
        user: PublicAccount::from(&account),
    })
}

/// Lists the authenticated account's results ordered by semester then subject.
///
/// An account without a profile or without results gets an empty list.
///
/// # Errors
///
/// Returns `Internal` if the store query fails.
pub fn list_results(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
) -> Result<Vec<ResultResponse>, ApiError> {
    let rows: Vec<ResultWithStudent> = persistence.list_results_for_account(account.account_id)?;
    debug!(
        account_id = account.account_id,
        count = rows.len(),
        "Listed results"
    );
    Ok(rows.into_iter().map(ResultResponse::from).collect())
}

/// Summarizes the authenticated account's results per semester.
///
/// # Errors
///
/// Returns `Internal` if the store query fails.
pub fn summarize_results(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
) -> Result<Vec<SemesterSummaryResponse>, ApiError> {
    let summaries: Vec<SemesterSummary> =
        persistence.summarize_results_for_account(account.account_id)?;
    debug!(
        account_id = account.account_id,
        semesters = summaries.len(),
        "Summarized results"
    );
    Ok(summaries
        .into_iter()
        .map(SemesterSummaryResponse::from)
        .collect())
}
