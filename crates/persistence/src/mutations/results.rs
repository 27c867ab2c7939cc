// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Result mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::data_models::NewResult;
use crate::diesel_schema::results;
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = results)]
struct NewResultRow<'a> {
    student_id: i64,
    semester: i32,
    subject: &'a str,
    marks: i32,
    grade: Option<&'a str>,
    cgpa: f64,
}

/// Inserts a batch of results for one student in a single transaction.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the student does not
/// exist, or another error if the write fails. Nothing is written on error.
pub fn insert_results(
    conn: &mut SqliteConnection,
    student_id: i64,
    new_results: &[NewResult],
) -> Result<usize, PersistenceError> {
    let rows: Vec<NewResultRow<'_>> = new_results
        .iter()
        .map(|r| NewResultRow {
            student_id,
            semester: r.semester,
            subject: &r.subject,
            marks: r.marks,
            grade: r.grade.as_deref(),
            cgpa: r.cgpa,
        })
        .collect();

    let inserted: usize = conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut inserted: usize = 0;
        for row in &rows {
            inserted += diesel::insert_into(results::table)
                .values(row)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    info!(student_id, inserted, "Results inserted");
    Ok(inserted)
}
