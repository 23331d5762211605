//! Error types for Spendwise

use thiserror::Error;

use crate::models::Category;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("A budget for {0} already exists")]
    CategoryConflict(Category),

    /// A budget whose limit cannot be compared against (zero, negative, NaN)
    #[error("Budget for {category} has a non-positive amount: {amount}")]
    InvalidBudget { category: Category, amount: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
