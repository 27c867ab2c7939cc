// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use results_portal_domain::RollNumber;

/// A stored login identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub account_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
}

/// The academic profile owned by exactly one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentData {
    pub student_id: i64,
    pub account_id: i64,
    pub name: String,
    pub roll_number: String,
}

/// Input for creating an account together with its student profile.
///
/// The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    /// Display name for the student profile.
    pub name: &'a str,
    /// Explicit roll number. Derived from the account id when `None`.
    pub roll_number: Option<&'a RollNumber>,
}

/// Identifiers assigned when an account and its profile are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAccount {
    pub account_id: i64,
    pub student_id: i64,
    pub roll_number: RollNumber,
}

/// A result row to insert for a student.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResult {
    pub semester: i32,
    pub subject: String,
    pub marks: i32,
    pub grade: Option<String>,
    pub cgpa: f64,
}

/// A stored result joined with the owning student's name and roll number.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultWithStudent {
    pub result_id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub subject: String,
    pub marks: i32,
    pub grade: Option<String>,
    pub cgpa: f64,
    pub student_name: String,
    pub roll_number: String,
}

/// Per-semester aggregate over a student's results.
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterSummary {
    pub semester: i32,
    /// Mean of the stored per-record CGPA values.
    pub cgpa: f64,
    /// Number of result records in the semester.
    pub subjects: i64,
}
