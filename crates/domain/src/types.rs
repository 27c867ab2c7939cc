// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Role stored for every newly registered account.
pub const DEFAULT_ROLE: &str = "student";

/// Fixed enrolment-year prefix used when deriving roll numbers.
pub const ROLL_NUMBER_PREFIX: &str = "2024";

/// A student's roll number.
///
/// Roll numbers are globally unique. They are either supplied at
/// registration time or derived from the owning account's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollNumber(String);

impl RollNumber {
    /// Creates a roll number from a supplied value.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank, contains whitespace, or falls
    /// in the space reserved for derived roll numbers.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidRollNumber(String::from(
                "Roll number cannot be empty",
            )));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidRollNumber(format!(
                "Roll number '{trimmed}' must not contain whitespace"
            )));
        }
        if Self::is_reserved(trimmed) {
            return Err(DomainError::InvalidRollNumber(format!(
                "Roll number '{trimmed}' is reserved for generated roll numbers"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns `true` if `value` has the shape of a derived roll number: the
    /// prefix followed only by ASCII digits.
    ///
    /// Supplied roll numbers must not take this shape.
    #[must_use]
    pub fn is_reserved(value: &str) -> bool {
        value.strip_prefix(ROLL_NUMBER_PREFIX).is_some_and(|digits| {
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
        })
    }

    /// Derives the roll number for an account.
    ///
    /// The result is the fixed prefix followed by the account identifier,
    /// zero-padded to at least three digits (account 7 → `2024007`).
    #[must_use]
    pub fn derive_from_account(account_id: i64) -> Self {
        Self(format!("{ROLL_NUMBER_PREFIX}{account_id:03}"))
    }

    /// Returns the roll number as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RollNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
