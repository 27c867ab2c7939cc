// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use results_portal_domain::DomainError;
use results_portal_persistence::PersistenceError;
use thiserror::Error;
use tracing::{debug, error};

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// contract seen by HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// An account with the same email or username already exists.
    #[error("{message}")]
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// No account matches the supplied email.
    #[error("{message}")]
    NotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The supplied password does not match the stored hash.
    #[error("Invalid password")]
    InvalidCredentials,
    /// A required field was missing or malformed.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// No bearer token was presented.
    #[error("Access token required")]
    Unauthenticated,
    /// The bearer token is malformed, forged or expired.
    #[error("Invalid token: {reason}")]
    InvalidToken {
        /// Why verification failed.
        reason: String,
    },
    /// An unexpected store, hashing or signing failure.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
        DomainError::InvalidRollNumber(_) => ApiError::InvalidInput {
            field: String::from("roll_number"),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Unique constraint failures become `Conflict`; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(detail) => {
            debug!(%detail, "Unique constraint rejected write");
            ApiError::Conflict {
                message: String::from("User already exists"),
            }
        }
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}
