// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod initialization_tests;
mod result_tests;

use crate::{CreatedAccount, NewAccount, NewResult, Persistence};

/// Placeholder hash; persistence never inspects password hashes.
pub const TEST_PASSWORD_HASH: &str = "$2b$10$placeholderplaceholderplaceholderplaceholder";

pub fn create_test_account(
    persistence: &mut Persistence,
    username: &str,
    email: &str,
) -> CreatedAccount {
    persistence
        .create_account_with_profile(&NewAccount {
            username,
            email,
            password_hash: TEST_PASSWORD_HASH,
            role: "student",
            name: username,
            roll_number: None,
        })
        .expect("Failed to create test account")
}

pub fn new_result(semester: i32, subject: &str, marks: i32, cgpa: f64) -> NewResult {
    NewResult {
        semester,
        subject: subject.to_string(),
        marks,
        grade: Some(String::from("A")),
        cgpa,
    }
}
