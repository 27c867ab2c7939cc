// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use results_portal_domain::RollNumber;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{CreatedAccount, NewAccount};
use crate::diesel_schema::{accounts, students};
use crate::error::PersistenceError;

/// Creates an account and its student profile atomically.
///
/// When `new_account.roll_number` is `None` the roll number is derived
/// from the newly assigned account id. Either both rows are written or
/// neither is.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the username, email or
/// roll number is already taken, or another error if the write fails.
pub fn create_account_with_profile(
    conn: &mut SqliteConnection,
    new_account: &NewAccount<'_>,
) -> Result<CreatedAccount, PersistenceError> {
    let created: CreatedAccount = conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(accounts::table)
            .values((
                accounts::username.eq(new_account.username),
                accounts::email.eq(new_account.email),
                accounts::password_hash.eq(new_account.password_hash),
                accounts::role.eq(new_account.role),
            ))
            .execute(conn)?;

        let account_id: i64 = get_last_insert_rowid(conn)?;

        let roll_number: RollNumber = new_account
            .roll_number
            .cloned()
            .unwrap_or_else(|| RollNumber::derive_from_account(account_id));

        diesel::insert_into(students::table)
            .values((
                students::account_id.eq(account_id),
                students::name.eq(new_account.name),
                students::roll_number.eq(roll_number.value()),
            ))
            .execute(conn)?;

        let student_id: i64 = get_last_insert_rowid(conn)?;

        Ok(CreatedAccount {
            account_id,
            student_id,
            roll_number,
        })
    })?;

    info!(
        account_id = created.account_id,
        student_id = created.student_id,
        roll_number = %created.roll_number,
        "Account created"
    );

    Ok(created)
}
