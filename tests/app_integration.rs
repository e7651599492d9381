use khata::core::{Entry, EntryKind, Identity, LedgerStore, analytics};
use khata::store::KeyValueStore;
use khata::{AppCommand, run_command};
use tracing::info;

mod test_utils {
    use std::fs;

    /// A config file wired to a throwaway data directory. Keep both guards
    /// alive for the duration of the test.
    pub fn test_env() -> (tempfile::NamedTempFile, tempfile::TempDir) {
        let data_dir = tempfile::tempdir().expect("Failed to create temp data dir");
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");

        let config_content = format!(
            r#"
currency: "INR"
data_path: "{}"
"#,
            data_dir.path().display()
        );
        fs::write(config_file.path(), &config_content).expect("Failed to write config file");

        (config_file, data_dir)
    }

    pub fn add(description: &str, amount: &str, kind: &str, date: &str) -> khata::AppCommand {
        khata::AppCommand::Add {
            description: description.to_string(),
            amount: amount.to_string(),
            kind: kind.to_string(),
            date: Some(date.to_string()),
        }
    }
}

fn login(name: &str, email: &str) -> AppCommand {
    AppCommand::Login {
        name: name.to_string(),
        email: email.to_string(),
    }
}

/// Reads the persisted ledger back the way a fresh process would.
fn load_ledger(data_dir: &tempfile::TempDir, name: &str, email: &str) -> Vec<Entry> {
    let store = KeyValueStore::open(data_dir.path()).expect("Failed to reopen store");
    let ledgers = store
        .collection::<Vec<Entry>>("ledgers")
        .expect("Failed to open ledgers collection");
    let identity = Identity {
        display_name: name.to_string(),
        email: email.to_string(),
    };
    let ledger = LedgerStore::load(identity, ledgers).expect("Failed to load ledger");
    ledger.entries().to_vec()
}

#[test_log::test]
fn test_full_ledger_flow() {
    let (config_file, data_dir) = test_utils::test_env();
    let config_path = config_file.path().to_str().unwrap();

    run_command(login("Asha", "asha@example.com"), Some(config_path)).unwrap();

    // Added out of date order; the ledger must sort them
    run_command(
        test_utils::add("Rent", "300", "expense", "2024-01-05"),
        Some(config_path),
    )
    .unwrap();
    run_command(
        test_utils::add("Salary", "1000", "income", "2024-01-01"),
        Some(config_path),
    )
    .unwrap();
    run_command(
        test_utils::add("Food", "50", "expense", "2024-01-05"),
        Some(config_path),
    )
    .unwrap();

    run_command(AppCommand::Whoami, Some(config_path)).unwrap();
    run_command(AppCommand::List, Some(config_path)).unwrap();
    run_command(AppCommand::Summary, Some(config_path)).unwrap();

    let entries = load_ledger(&data_dir, "Asha", "asha@example.com");
    info!(?entries, "Persisted ledger after adds");

    let descriptions: Vec<_> = entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Salary", "Rent", "Food"]);
    assert!(entries.iter().all(|e| e.amount >= 0.0));
    assert_eq!(entries[0].kind, EntryKind::Income);

    assert_eq!(analytics::running_balance(&entries, 0), 1000.0);
    assert_eq!(analytics::running_balance(&entries, 1), 700.0);
    assert_eq!(analytics::running_balance(&entries, 2), 650.0);

    let totals = analytics::aggregate_totals(&entries);
    assert_eq!(totals.total_income, 1000.0);
    assert_eq!(totals.total_expense, 350.0);
    assert_eq!(totals.net_balance, 650.0);
}

#[test_log::test]
fn test_edit_and_remove_flow() {
    let (config_file, data_dir) = test_utils::test_env();
    let config_path = config_file.path().to_str().unwrap();

    run_command(login("Asha", "asha@example.com"), Some(config_path)).unwrap();
    run_command(
        test_utils::add("Salary", "1000", "income", "2024-01-01"),
        Some(config_path),
    )
    .unwrap();
    run_command(
        test_utils::add("Rent", "300", "expense", "2024-01-05"),
        Some(config_path),
    )
    .unwrap();
    run_command(
        test_utils::add("Food", "50", "expense", "2024-01-07"),
        Some(config_path),
    )
    .unwrap();

    // Amount-only edit keeps the other fields
    run_command(
        AppCommand::Edit {
            row: 2,
            description: None,
            amount: Some("350".to_string()),
            kind: None,
            date: None,
        },
        Some(config_path),
    )
    .unwrap();

    let entries = load_ledger(&data_dir, "Asha", "asha@example.com");
    assert_eq!(entries[1].description, "Rent");
    assert_eq!(entries[1].amount, 350.0);
    assert_eq!(entries[1].kind, EntryKind::Expense);

    // Ids survive reload and edits
    let rent_id = entries[1].id;
    let entries_again = load_ledger(&data_dir, "Asha", "asha@example.com");
    assert_eq!(entries_again[1].id, rent_id);

    // Rows 1 and 3 go away in one command; only Rent remains
    run_command(
        AppCommand::Remove {
            rows: vec![1, 3],
            all: false,
        },
        Some(config_path),
    )
    .unwrap();

    let entries = load_ledger(&data_dir, "Asha", "asha@example.com");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description, "Rent");
    assert_eq!(entries[0].id, rent_id);
}

#[test_log::test]
fn test_commands_require_login() {
    let (config_file, _data_dir) = test_utils::test_env();
    let config_path = config_file.path().to_str().unwrap();

    let err = run_command(
        test_utils::add("Salary", "1000", "income", "2024-01-01"),
        Some(config_path),
    )
    .unwrap_err();
    assert!(err.to_string().contains("not logged in"));

    assert!(run_command(AppCommand::List, Some(config_path)).is_err());
    assert!(run_command(AppCommand::Summary, Some(config_path)).is_err());

    // Whoami and logout are fine without a session
    run_command(AppCommand::Whoami, Some(config_path)).unwrap();
    run_command(AppCommand::Logout, Some(config_path)).unwrap();
}

#[test_log::test]
fn test_logout_keeps_ledger_for_next_login() {
    let (config_file, data_dir) = test_utils::test_env();
    let config_path = config_file.path().to_str().unwrap();

    run_command(login("Asha", "asha@example.com"), Some(config_path)).unwrap();
    run_command(
        test_utils::add("Salary", "1000", "income", "2024-01-01"),
        Some(config_path),
    )
    .unwrap();
    run_command(AppCommand::Logout, Some(config_path)).unwrap();

    // Logged out: mutations are rejected, data stays put
    assert!(
        run_command(
            test_utils::add("Rent", "300", "expense", "2024-01-05"),
            Some(config_path)
        )
        .is_err()
    );
    assert_eq!(load_ledger(&data_dir, "Asha", "asha@example.com").len(), 1);

    // A different identity gets its own empty ledger
    run_command(login("Ravi", "ravi@example.com"), Some(config_path)).unwrap();
    assert!(load_ledger(&data_dir, "Ravi", "ravi@example.com").is_empty());

    // Logging back in reuses the original ledger
    run_command(login("Asha", "asha@example.com"), Some(config_path)).unwrap();
    run_command(
        test_utils::add("Rent", "300", "expense", "2024-01-05"),
        Some(config_path),
    )
    .unwrap();
    assert_eq!(load_ledger(&data_dir, "Asha", "asha@example.com").len(), 2);
}

#[test_log::test]
fn test_validation_errors_leave_ledger_unchanged() {
    let (config_file, data_dir) = test_utils::test_env();
    let config_path = config_file.path().to_str().unwrap();

    run_command(login("Asha", "asha@example.com"), Some(config_path)).unwrap();

    for bad in [
        test_utils::add("", "10", "income", "2024-01-01"),
        test_utils::add("Rent", "-5", "expense", "2024-01-01"),
        test_utils::add("Rent", "ten", "expense", "2024-01-01"),
        test_utils::add("Rent", "10", "loan", "2024-01-01"),
        test_utils::add("Rent", "10", "expense", "Jan 1"),
    ] {
        assert!(run_command(bad, Some(config_path)).is_err());
    }

    assert!(load_ledger(&data_dir, "Asha", "asha@example.com").is_empty());
}

#[test_log::test]
fn test_add_defaults_to_today() {
    let (config_file, data_dir) = test_utils::test_env();
    let config_path = config_file.path().to_str().unwrap();

    run_command(login("Asha", "asha@example.com"), Some(config_path)).unwrap();

    let before = chrono::Local::now().date_naive();
    run_command(
        AppCommand::Add {
            description: "Chai".to_string(),
            amount: "20".to_string(),
            kind: "expense".to_string(),
            date: None,
        },
        Some(config_path),
    )
    .unwrap();
    let after = chrono::Local::now().date_naive();

    let entries = load_ledger(&data_dir, "Asha", "asha@example.com");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].date >= before && entries[0].date <= after);
}
