// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Result queries scoped to the owning account.
//!
//! Every query here filters on `students.account_id`, so callers can only
//! ever see the results of the account they pass in.

use diesel::SqliteConnection;
use diesel::dsl::{avg, count};
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{ResultWithStudent, SemesterSummary};
use crate::diesel_schema::{results, students};
use crate::error::PersistenceError;

/// Result row joined with the owning student's name and roll number.
///
/// Field order matches the `select` tuple below.
#[derive(Queryable)]
struct ResultWithStudentRow {
    result_id: i64,
    student_id: i64,
    semester: i32,
    subject: String,
    marks: i32,
    grade: Option<String>,
    cgpa: f64,
    student_name: String,
    roll_number: String,
}

/// Lists every result belonging to the account's student profile.
///
/// Rows are ordered by semester, then by subject code (byte order).
/// Returns an empty list when the account has no profile or no results.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_results_for_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Vec<ResultWithStudent>, PersistenceError> {
    debug!(account_id, "Listing results");

    let rows: Vec<ResultWithStudentRow> = results::table
        .inner_join(students::table)
        .filter(students::account_id.eq(account_id))
        .order((results::semester.asc(), results::subject.asc()))
        .select((
            results::result_id,
            results::student_id,
            results::semester,
            results::subject,
            results::marks,
            results::grade,
            results::cgpa,
            students::name,
            students::roll_number,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| ResultWithStudent {
            result_id: row.result_id,
            student_id: row.student_id,
            semester: row.semester,
            subject: row.subject,
            marks: row.marks,
            grade: row.grade,
            cgpa: row.cgpa,
            student_name: row.student_name,
            roll_number: row.roll_number,
        })
        .collect())
}

/// Aggregates the account's results per semester.
///
/// `cgpa` is the SQL `AVG` of the stored per-record CGPA column, not a
/// value derived from marks. Semesters without results never appear.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn summarize_results_for_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Vec<SemesterSummary>, PersistenceError> {
    debug!(account_id, "Summarizing results by semester");

    let rows: Vec<(i32, Option<f64>, i64)> = results::table
        .inner_join(students::table)
        .filter(students::account_id.eq(account_id))
        .group_by(results::semester)
        .select((results::semester, avg(results::cgpa), count(results::result_id)))
        .order(results::semester.asc())
        .load(conn)?;

    // AVG is NULL only for an empty group, which GROUP BY never yields.
    Ok(rows
        .into_iter()
        .map(|(semester, cgpa, subjects)| SemesterSummary {
            semester,
            cgpa: cgpa.unwrap_or_default(),
            subjects,
        })
        .collect())
}
