// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presence checks for credential input.
//!
//! Only presence is checked here; email shape and password strength are not.

use crate::error::DomainError;

/// Ensures a field is present and not blank.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is empty or whitespace.
pub fn require_present(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// Validates the fields required to register an account.
///
/// # Errors
///
/// Returns an error naming the first missing field, checked in the order
/// username, email, password.
pub fn validate_registration_fields(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), DomainError> {
    require_present("username", username)?;
    require_present("email", email)?;
    require_present("password", password)?;
    Ok(())
}

/// Validates the fields required to log in.
///
/// # Errors
///
/// Returns an error naming the first missing field.
pub fn validate_login_fields(email: &str, password: &str) -> Result<(), DomainError> {
    require_present("email", email)?;
    require_present("password", password)?;
    Ok(())
}
