// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use results_portal_persistence::{AccountData, ResultWithStudent, SemesterSummary};
use serde::{Deserialize, Serialize};

/// API request to register a new account.
///
/// Missing JSON fields deserialize as empty strings so that presence is
/// reported as an input error rather than a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Display name for the student profile. Defaults to the username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Roll number. Derived from the account id when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// A success message.
    pub message: String,
}

/// API request to log in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&AccountData> for PublicAccount {
    fn from(account: &AccountData) -> Self {
        Self {
            id: account.account_id,
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role.clone(),
        }
    }
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    pub user: PublicAccount,
}

/// One subject result with the owning student's name and roll number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultResponse {
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub subject: String,
    pub marks: i32,
    pub grade: Option<String>,
    pub cgpa: f64,
    pub student_name: String,
    pub roll_number: String,
}

impl From<ResultWithStudent> for ResultResponse {
    fn from(row: ResultWithStudent) -> Self {
        Self {
            id: row.result_id,
            student_id: row.student_id,
            semester: row.semester,
            subject: row.subject,
            marks: row.marks,
            grade: row.grade,
            cgpa: row.cgpa,
            student_name: row.student_name,
            roll_number: row.roll_number,
        }
    }
}

/// Per-semester summary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSummaryResponse {
    pub semester: i32,
    /// Mean of the stored CGPA values for the semester.
    pub cgpa: f64,
    /// Number of subjects (result rows) in the semester.
    pub subjects: i64,
}

impl From<SemesterSummary> for SemesterSummaryResponse {
    fn from(summary: SemesterSummary) -> Self {
        Self {
            semester: summary.semester,
            cgpa: summary.cgpa,
            subjects: summary.subjects,
        }
    }
}
