// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use results_portal_persistence::{AccountData, NewResult, Persistence};

use crate::{LoginRequest, RegisterRequest, TokenConfig};

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_tokens() -> TokenConfig {
    TokenConfig::new(TEST_SECRET)
}

pub fn create_register_request(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: String::from("hunter22"),
        name: None,
        roll_number: None,
    }
}

pub fn create_login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub fn create_test_account_data(account_id: i64) -> AccountData {
    AccountData {
        account_id,
        username: String::from("alice"),
        email: String::from("alice@example.com"),
        password_hash: String::from("not-a-real-hash"),
        role: String::from("student"),
        created_at: String::from("2026-01-01 00:00:00"),
    }
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
