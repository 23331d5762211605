//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use chrono::Datelike;
use spendwise_core::db::Database;
use spendwise_core::models::{parse_date, Category, NewBudget, NewTransaction};
use spendwise_core::InsightConfig;

use crate::commands::{self, truncate, TransactionEdit};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn create_test_transaction(db: &Database, description: &str, amount: f64) -> i64 {
    db.create_transaction(&NewTransaction {
        amount,
        date: parse_date("2026-03-10").unwrap(),
        description: description.to_string(),
        category: Some(Category::Food),
    })
    .unwrap()
    .id
}

// ========== Transactions Command Tests ==========

#[test]
fn test_cmd_transactions_list_empty() {
    let db = setup_test_db();
    assert!(commands::cmd_transactions_list(&db, 20).is_ok());
}

#[test]
fn test_cmd_transactions_add() {
    let db = setup_test_db();
    commands::cmd_transactions_add(&db, 18.75, "  Pizza night ", Some("2026-03-06"), Some("Food"))
        .unwrap();

    let transactions = db.list_transactions().unwrap();
    assert_eq!(transactions.len(), 1);
    let tx = &transactions[0];
    assert_eq!(tx.amount, 18.75);
    assert_eq!(tx.description, "Pizza night");
    assert_eq!(tx.category, Some(Category::Food));
    assert_eq!(tx.date.day(), 6);

    assert!(commands::cmd_transactions_list(&db, 20).is_ok());
}

#[test]
fn test_cmd_transactions_add_defaults_to_now() {
    let db = setup_test_db();
    commands::cmd_transactions_add(&db, 3.0, "Bus fare", None, None).unwrap();

    let tx = &db.list_transactions().unwrap()[0];
    assert_eq!(tx.category, None);
    assert_eq!(tx.date.date_naive(), chrono::Utc::now().date_naive());
}

#[test]
fn test_cmd_transactions_add_rejects_bad_input() {
    let db = setup_test_db();
    assert!(commands::cmd_transactions_add(&db, 5.0, "Snack", None, Some("yachts")).is_err());
    assert!(commands::cmd_transactions_add(&db, 5.0, "Snack", Some("tomorrow"), None).is_err());
    assert!(commands::cmd_transactions_add(&db, 5.0, "Snack", Some("+12345-01-01"), None).is_err());
    assert!(commands::cmd_transactions_add(&db, 0.0, "Snack", None, None).is_err());
    assert!(db.list_transactions().unwrap().is_empty());
}

#[test]
fn test_cmd_transactions_edit_keeps_omitted_fields() {
    let db = setup_test_db();
    let id = create_test_transaction(&db, "Groceries", 40.0);

    commands::cmd_transactions_edit(
        &db,
        id,
        TransactionEdit {
            amount: Some(42.0),
            ..Default::default()
        },
    )
    .unwrap();

    let tx = db.get_transaction(id).unwrap().unwrap();
    assert_eq!(tx.amount, 42.0);
    assert_eq!(tx.description, "Groceries");
    assert_eq!(tx.category, Some(Category::Food));
}

#[test]
fn test_cmd_transactions_edit_clears_category() {
    let db = setup_test_db();
    let id = create_test_transaction(&db, "Groceries", 40.0);

    commands::cmd_transactions_edit(
        &db,
        id,
        TransactionEdit {
            category: Some("none".to_string()),
            description: Some("Mixed shopping".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let tx = db.get_transaction(id).unwrap().unwrap();
    assert_eq!(tx.category, None);
    assert_eq!(tx.description, "Mixed shopping");
}

#[test]
fn test_cmd_transactions_edit_missing() {
    let db = setup_test_db();
    let result = commands::cmd_transactions_edit(&db, 404, TransactionEdit::default());
    assert!(result.is_err());
}

#[test]
fn test_cmd_transactions_delete() {
    let db = setup_test_db();
    let id = create_test_transaction(&db, "Coffee", 4.0);

    commands::cmd_transactions_delete(&db, id).unwrap();
    assert!(db.get_transaction(id).unwrap().is_none());
    assert!(commands::cmd_transactions_delete(&db, id).is_err());
}

// ========== Budgets Command Tests ==========

#[test]
fn test_cmd_budgets_add_and_list() {
    let db = setup_test_db();
    commands::cmd_budgets_add(&db, "food", 300.0).unwrap();
    create_test_transaction(&db, "Groceries", 120.0);

    let budget = db.get_budget_by_category(Category::Food).unwrap().unwrap();
    assert_eq!(budget.amount, 300.0);

    assert!(commands::cmd_budgets_list(&db).is_ok());
}

#[test]
fn test_cmd_budgets_add_duplicate_fails() {
    let db = setup_test_db();
    commands::cmd_budgets_add(&db, "food", 300.0).unwrap();

    let result = commands::cmd_budgets_add(&db, "food", 500.0);
    assert!(result.is_err());
    assert_eq!(db.list_budgets().unwrap().len(), 1);
}

#[test]
fn test_cmd_budgets_set() {
    let db = setup_test_db();
    commands::cmd_budgets_add(&db, "housing", 1000.0).unwrap();
    commands::cmd_budgets_set(&db, "housing", 1100.0).unwrap();

    let budget = db
        .get_budget_by_category(Category::Housing)
        .unwrap()
        .unwrap();
    assert_eq!(budget.amount, 1100.0);

    assert!(commands::cmd_budgets_set(&db, "debt", 10.0).is_err());
}

#[test]
fn test_cmd_budgets_delete() {
    let db = setup_test_db();
    commands::cmd_budgets_add(&db, "gifts", 50.0).unwrap();
    commands::cmd_budgets_delete(&db, "gifts").unwrap();

    assert!(db.list_budgets().unwrap().is_empty());
    assert!(commands::cmd_budgets_delete(&db, "gifts").is_err());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_reports_run_on_empty_db() {
    let db = setup_test_db();
    let config = InsightConfig::default();

    assert!(commands::cmd_dashboard(&db, &config).is_ok());
    assert!(commands::cmd_insights(&db, &config).is_ok());
    assert!(commands::cmd_report_categories(&db).is_ok());
    assert!(commands::cmd_report_budgets(&db).is_ok());
    assert!(commands::cmd_report_daily(&db, Some("2026-03")).is_ok());
    assert!(commands::cmd_categories(&db).is_ok());
}

#[test]
fn test_cmd_reports_with_data() {
    let db = setup_test_db();
    let config = InsightConfig::default();
    db.create_budget(&NewBudget {
        category: Category::Food,
        amount: 100.0,
    })
    .unwrap();
    create_test_transaction(&db, "Banquet", 180.0);

    assert!(commands::cmd_dashboard(&db, &config).is_ok());
    assert!(commands::cmd_insights(&db, &config).is_ok());
    assert!(commands::cmd_report_categories(&db).is_ok());
    assert!(commands::cmd_report_budgets(&db).is_ok());
    assert!(commands::cmd_report_daily(&db, None).is_ok());
}

#[test]
fn test_cmd_report_daily_bad_month() {
    let db = setup_test_db();
    assert!(commands::cmd_report_daily(&db, Some("2026-13")).is_err());
    assert!(commands::cmd_report_daily(&db, Some("March")).is_err());
}

#[test]
fn test_resolve_month() {
    assert_eq!(commands::resolve_month(Some("2024-02")).unwrap(), (2024, 2));

    let today = chrono::Utc::now().date_naive();
    assert_eq!(
        commands::resolve_month(None).unwrap(),
        (today.year(), today.month())
    );
}

// ========== Core Tests ==========

#[test]
fn test_parse_category() {
    assert_eq!(commands::parse_category("food").unwrap(), Category::Food);
    assert_eq!(
        commands::parse_category("Healthcare").unwrap(),
        Category::Healthcare
    );

    let err = commands::parse_category("yachts").unwrap_err().to_string();
    assert!(err.contains("housing"));
}

#[test]
fn test_open_db_unencrypted_and_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendwise.db");

    commands::cmd_init(&path, true).unwrap();
    assert!(path.exists());

    let db = commands::open_db(&path, true).unwrap();
    assert!(db.list_transactions().unwrap().is_empty());
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[insights]\nnear_limit_percent = 75.0").unwrap();

    let config = commands::load_config(Some(file.path())).unwrap();
    assert_eq!(config.near_limit_percent, 75.0);
    assert_eq!(config.large_transaction_amount, 100.0);
}

#[test]
fn test_load_config_invalid() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[insights]\nnear_limit_percent = \"lots\"").unwrap();

    assert!(commands::load_config(Some(file.path())).is_err());
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("this is a long description", 10), "this is...");
    assert_eq!(truncate("café au lait", 7), "café...");
}
