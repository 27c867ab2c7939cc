// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data inserted into an empty database.

use results_portal_domain::DEFAULT_ROLE;
use results_portal_persistence::{CreatedAccount, NewAccount, NewResult, Persistence};
use tracing::info;

use crate::auth::hash_password;
use crate::error::ApiError;

pub const DEMO_USERNAME: &str = "student1";
pub const DEMO_EMAIL: &str = "student1@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "John Doe";
/// Derived roll number of the demo account, which is always the first account.
pub const DEMO_ROLL_NUMBER: &str = "2024001";

/// (semester, subject, marks, grade, cgpa)
const DEMO_RESULTS: [(i32, &str, i32, &str, f64); 8] = [
    (1, "ITC", 85, "A", 8.5),
    (1, "FPC", 88, "A", 8.5),
    (1, "IWT", 82, "A", 8.5),
    (1, "BMC", 87, "A", 8.5),
    (2, "IFSD", 90, "A", 8.8),
    (2, "FPP", 85, "A", 8.8),
    (2, "DBMS", 88, "A", 8.8),
    (2, "PROBS", 86, "A", 8.8),
];

/// Inserts the demo account, profile and results if no account exists yet.
///
/// Returns `true` when data was inserted.
///
/// # Errors
///
/// Returns `Internal` if hashing or a store write fails.
pub fn seed_demo_data(persistence: &mut Persistence) -> Result<bool, ApiError> {
    if persistence.count_accounts()? > 0 {
        info!("Accounts present, skipping demo seed");
        return Ok(false);
    }

    let password_hash: String = hash_password(DEMO_PASSWORD)?;

    let created: CreatedAccount = persistence.create_account_with_profile(&NewAccount {
        username: DEMO_USERNAME,
        email: DEMO_EMAIL,
        password_hash: &password_hash,
        role: DEFAULT_ROLE,
        name: DEMO_NAME,
        roll_number: None,
    })?;

    let results: Vec<NewResult> = DEMO_RESULTS
        .iter()
        .map(|&(semester, subject, marks, grade, cgpa)| NewResult {
            semester,
            subject: subject.to_string(),
            marks,
            grade: Some(grade.to_string()),
            cgpa,
        })
        .collect();

    let inserted: usize = persistence.insert_results(created.student_id, &results)?;

    info!(
        account_id = created.account_id,
        roll_number = %created.roll_number,
        results = inserted,
        "Seeded demo data"
    );

    Ok(true)
}
