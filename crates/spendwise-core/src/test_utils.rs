//! Fixture builders shared by the core test suites

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Budget, Category, NewTransaction, Transaction};

/// Noon UTC on the given day
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// An in-memory transaction, as if loaded from the store
pub fn tx(
    id: i64,
    amount: f64,
    category: Option<Category>,
    date: DateTime<Utc>,
    description: &str,
) -> Transaction {
    Transaction {
        id,
        amount,
        date,
        description: description.to_string(),
        category,
        created_at: date,
    }
}

/// A categorized transaction on 2026-03-10 with a generic description
pub fn spend(id: i64, category: Category, amount: f64) -> Transaction {
    tx(id, amount, Some(category), at(2026, 3, 10), "purchase")
}

pub fn budget(id: i64, category: Category, amount: f64) -> Budget {
    Budget {
        id,
        category,
        amount,
        created_at: at(2026, 3, 1),
    }
}

pub fn new_tx(amount: f64, category: Option<Category>, description: &str) -> NewTransaction {
    NewTransaction {
        amount,
        date: at(2026, 3, 10),
        description: description.to_string(),
        category,
    }
}
