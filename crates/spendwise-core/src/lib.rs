//! Spendwise Core Library
//!
//! Shared functionality for the Spendwise personal finance tracker:
//! - Domain models (transactions, budgets, categories)
//! - Encrypted SQLite record store and migrations
//! - Aggregation engine (category totals, budget comparisons, insights)
//! - Insight threshold configuration

pub mod config;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;

#[cfg(test)]
mod test_utils;

pub use config::InsightConfig;
pub use db::Database;
pub use error::{Error, Result};
pub use insights::{Insight, InsightEngine, InsightKind};
pub use models::{
    Budget, BudgetUpdate, Category, NewBudget, NewTransaction, Snapshot, Transaction,
};
