// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for result listing and per-semester aggregation.

use crate::Persistence;
use crate::tests::{create_test_account, new_result};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_results_are_ordered_by_semester_then_subject() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = create_test_account(&mut persistence, "student1", "student1@example.com");

    persistence
        .insert_results(
            account.student_id,
            &[
                new_result(2, "DBMS", 88, 8.8),
                new_result(1, "ITC", 85, 8.5),
                new_result(1, "BMC", 87, 8.5),
                new_result(2, "FPP", 85, 8.8),
            ],
        )
        .unwrap();

    let rows = persistence
        .list_results_for_account(account.account_id)
        .unwrap();
    let order: Vec<(i32, &str)> = rows
        .iter()
        .map(|r| (r.semester, r.subject.as_str()))
        .collect();

    assert_eq!(
        order,
        vec![(1, "BMC"), (1, "ITC"), (2, "DBMS"), (2, "FPP")]
    );
}

#[test]
fn test_subject_order_is_byte_order() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = create_test_account(&mut persistence, "student1", "student1@example.com");

    persistence
        .insert_results(
            account.student_id,
            &[
                new_result(1, "b", 70, 7.0),
                new_result(1, "B", 70, 7.0),
                new_result(1, "a", 70, 7.0),
            ],
        )
        .unwrap();

    let subjects: Vec<String> = persistence
        .list_results_for_account(account.account_id)
        .unwrap()
        .into_iter()
        .map(|r| r.subject)
        .collect();

    assert_eq!(subjects, vec!["B", "a", "b"]);
}

#[test]
fn test_listed_results_carry_student_name_and_roll_number() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = create_test_account(&mut persistence, "student1", "student1@example.com");

    persistence
        .insert_results(account.student_id, &[new_result(1, "ITC", 85, 8.5)])
        .unwrap();

    let rows = persistence
        .list_results_for_account(account.account_id)
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.student_id, account.student_id);
    assert_eq!(row.student_name, "student1");
    assert_eq!(row.roll_number, account.roll_number.value());
    assert_eq!(row.marks, 85);
    assert_eq!(row.grade.as_deref(), Some("A"));
    assert_close(row.cgpa, 8.5);
}

#[test]
fn test_results_never_leak_across_accounts() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let alice = create_test_account(&mut persistence, "alice", "alice@example.com");
    let bob = create_test_account(&mut persistence, "bob", "bob@example.com");

    persistence
        .insert_results(
            alice.student_id,
            &[new_result(1, "ITC", 90, 9.0), new_result(2, "DBMS", 91, 9.1)],
        )
        .unwrap();
    persistence
        .insert_results(bob.student_id, &[new_result(1, "ITC", 60, 6.0)])
        .unwrap();

    let alice_rows = persistence.list_results_for_account(alice.account_id).unwrap();
    let bob_rows = persistence.list_results_for_account(bob.account_id).unwrap();

    assert_eq!(alice_rows.len(), 2);
    assert!(alice_rows.iter().all(|r| r.student_id == alice.student_id));
    assert_eq!(bob_rows.len(), 1);
    assert!(bob_rows.iter().all(|r| r.student_id == bob.student_id));

    let bob_summary = persistence
        .summarize_results_for_account(bob.account_id)
        .unwrap();
    assert_eq!(bob_summary.len(), 1);
    assert_eq!(bob_summary[0].subjects, 1);
    assert_close(bob_summary[0].cgpa, 6.0);
}

#[test]
fn test_account_without_results_gets_empty_lists() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = create_test_account(&mut persistence, "student1", "student1@example.com");

    assert!(
        persistence
            .list_results_for_account(account.account_id)
            .unwrap()
            .is_empty()
    );
    assert!(
        persistence
            .summarize_results_for_account(account.account_id)
            .unwrap()
            .is_empty()
    );
    assert!(persistence.list_results_for_account(12345).unwrap().is_empty());
}

#[test]
fn test_summary_averages_stored_cgpa_per_semester() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = create_test_account(&mut persistence, "student1", "student1@example.com");

    // Marks disagree with CGPA; the mean uses the stored field.
    persistence
        .insert_results(
            account.student_id,
            &[
                new_result(1, "ITC", 10, 8.0),
                new_result(1, "FPC", 99, 9.0),
                new_result(1, "IWT", 50, 7.0),
                new_result(3, "OS", 75, 6.5),
            ],
        )
        .unwrap();

    let summary = persistence
        .summarize_results_for_account(account.account_id)
        .unwrap();

    assert_eq!(summary.len(), 2, "semester 2 has no results and is omitted");
    assert_eq!(summary[0].semester, 1);
    assert_eq!(summary[0].subjects, 3);
    assert_close(summary[0].cgpa, 8.0);
    assert_eq!(summary[1].semester, 3);
    assert_eq!(summary[1].subjects, 1);
    assert_close(summary[1].cgpa, 6.5);
}

#[test]
fn test_insert_results_for_unknown_student_writes_nothing() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = create_test_account(&mut persistence, "student1", "student1@example.com");

    let result = persistence.insert_results(
        account.student_id + 100,
        &[new_result(1, "ITC", 85, 8.5)],
    );
    assert!(result.is_err());

    let result = persistence.insert_results(
        account.student_id,
        &[
            new_result(1, "ITC", 85, 8.5),
            new_result(1, "FPC", 88, 8.5),
        ],
    );
    assert_eq!(result.unwrap(), 2);
}
