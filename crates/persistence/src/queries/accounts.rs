// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and student profile queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{AccountData, StudentData};
use crate::diesel_schema::{accounts, students};
use crate::error::PersistenceError;

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct AccountRow {
    account_id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: String,
}

impl From<AccountRow> for AccountData {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.account_id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// Diesel Queryable struct for student profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct StudentRow {
    student_id: i64,
    account_id: i64,
    name: String,
    roll_number: String,
}

/// Retrieves an account by its exact email address.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no account uses the email.
pub fn find_account_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!(email, "Looking up account by email");

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::email.eq(email))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}

/// Retrieves any account that already uses the email or the username.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_account_by_email_or_username(
    conn: &mut SqliteConnection,
    email: &str,
    username: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!(email, username, "Checking for existing account");

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::email.eq(email).or(accounts::username.eq(username)))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}

/// Retrieves an account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!(account_id, "Looking up account by ID");

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::account_id.eq(account_id))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AccountData::from))
}

/// Counts all accounts.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_accounts(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let count: i64 = accounts::table.count().get_result(conn)?;
    Ok(count)
}

/// Retrieves the student profile owned by an account.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account has no profile.
pub fn get_student_by_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<StudentData>, PersistenceError> {
    debug!(account_id, "Looking up student profile");

    let row: Option<StudentRow> = students::table
        .filter(students::account_id.eq(account_id))
        .select(StudentRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| StudentData {
        student_id: row.student_id,
        account_id: row.account_id,
        name: row.name,
        roll_number: row.roll_number,
    }))
}
