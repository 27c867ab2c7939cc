// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential and results services for the Student Results Portal.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! owns password hashing, session token issuance and verification, the
//! registration and login flows, and the results listing and per-semester
//! summary. Every results call takes an [`AuthenticatedAccount`] produced
//! by token verification.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;
mod seed;
mod token;


pub use auth::{
    AuthenticatedAccount, CredentialService, PASSWORD_HASH_COST, Registration, hash_password,
    verify_password,
};
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{list_results, login, register, summarize_results};
pub use request_response::{
    LoginRequest, LoginResponse, PublicAccount, RegisterRequest, RegisterResponse,
    ResultResponse, SemesterSummaryResponse,
};
pub use seed::{
    DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD, DEMO_ROLL_NUMBER, DEMO_USERNAME, seed_demo_data,
};
pub use token::{SessionClaims, TokenConfig, encode_claims, issue_token, verify_token};
