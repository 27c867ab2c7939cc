// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or blank.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A supplied roll number is blank or malformed.
    InvalidRollNumber(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::InvalidRollNumber(msg) => write!(f, "Invalid roll number: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
