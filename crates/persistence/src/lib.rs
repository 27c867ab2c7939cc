// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Student Results Portal.
//!
//! This crate owns the relational store: accounts, the student profile each
//! account owns, and the per-subject result rows of each student. It is
//! built on Diesel with the `SQLite` backend.
//!
//! ## Schema
//!
//! - `accounts`: login identities (unique username and email)
//! - `students`: one profile per account (unique roll number)
//! - `results`: per-subject marks, grade and CGPA for a student
//!
//! Foreign keys run `students → accounts` and `results → students`, and
//! enforcement is verified whenever a connection is opened.
//!
//! ## Testing Philosophy
//!
//! Every test gets its own in-memory database via `Persistence::new_in_memory()`,
//! so tests never share rows.

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

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    AccountData, CreatedAccount, NewAccount, NewResult, ResultWithStudent, SemesterSummary,
    StudentData,
};
pub use error::PersistenceError;

/// Owned handle to the portal's database.
///
/// One value is created at process start and shared by the server; it is
/// closed when dropped.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:portal_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist and migrations are applied.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Creates an account and its paired student profile in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the username, email or
    /// roll number already exists.
    pub fn create_account_with_profile(
        &mut self,
        new_account: &NewAccount<'_>,
    ) -> Result<CreatedAccount, PersistenceError> {
        mutations::accounts::create_account_with_profile(&mut self.conn, new_account)
    }

    /// Retrieves an account by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_account_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::find_account_by_email(&mut self.conn, email)
    }

    /// Retrieves any account matching either the email or the username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_account_by_email_or_username(
        &mut self,
        email: &str,
        username: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::find_account_by_email_or_username(&mut self.conn, email, username)
    }

    /// Retrieves an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_id(
        &mut self,
        account_id: i64,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_id(&mut self.conn, account_id)
    }

    /// Counts all accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_accounts(&mut self) -> Result<i64, PersistenceError> {
        queries::accounts::count_accounts(&mut self.conn)
    }

    /// Retrieves the student profile owned by an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_student_by_account(
        &mut self,
        account_id: i64,
    ) -> Result<Option<StudentData>, PersistenceError> {
        queries::accounts::get_student_by_account(&mut self.conn, account_id)
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Inserts results for a student in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist or the write fails.
    pub fn insert_results(
        &mut self,
        student_id: i64,
        new_results: &[NewResult],
    ) -> Result<usize, PersistenceError> {
        mutations::results::insert_results(&mut self.conn, student_id, new_results)
    }

    /// Lists the account's results ordered by semester then subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_results_for_account(
        &mut self,
        account_id: i64,
    ) -> Result<Vec<ResultWithStudent>, PersistenceError> {
        queries::results::list_results_for_account(&mut self.conn, account_id)
    }

    /// Aggregates the account's results per semester.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn summarize_results_for_account(
        &mut self,
        account_id: i64,
    ) -> Result<Vec<SemesterSummary>, PersistenceError> {
        queries::results::summarize_results_for_account(&mut self.conn, account_id)
    }
}
