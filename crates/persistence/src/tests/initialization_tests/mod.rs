// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use crate::Persistence;
use crate::tests::create_test_account;

#[test]
fn test_persistence_initialization() {
    let result = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    create_test_account(&mut db1, "student1", "student1@example.com");

    assert_eq!(db1.count_accounts().unwrap(), 1);
    assert_eq!(db2.count_accounts().unwrap(), 0);
}

#[test]
fn test_file_database_keeps_rows_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "results_portal_reopen_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        create_test_account(&mut persistence, "student1", "student1@example.com");
    }

    // Reopening re-runs migrations, which must be a no-op on an existing schema.
    let mut persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(persistence.count_accounts().unwrap(), 1);
    drop(persistence);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
