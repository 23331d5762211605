//! Domain models for Spendwise

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Minimum description length (characters)
pub const DESCRIPTION_MIN_LEN: usize = 2;

/// Maximum description length (characters)
pub const DESCRIPTION_MAX_LEN: usize = 100;

/// Earliest year a transaction date may carry
pub const MIN_YEAR: i32 = 0;

/// Latest year a transaction date may carry
pub const MAX_YEAR: i32 = 9999;

/// Spending category shared by transactions and budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Housing,
    Transportation,
    Food,
    Utilities,
    Insurance,
    Healthcare,
    Savings,
    Personal,
    Entertainment,
    Education,
    Debt,
    Gifts,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Insurance => "insurance",
            Self::Healthcare => "healthcare",
            Self::Savings => "savings",
            Self::Personal => "personal",
            Self::Entertainment => "entertainment",
            Self::Education => "education",
            Self::Debt => "debt",
            Self::Gifts => "gifts",
            Self::Other => "other",
        }
    }

    /// Human-readable label used in insight text and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Food => "Food",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Healthcare => "Healthcare",
            Self::Savings => "Savings",
            Self::Personal => "Personal",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Debt => "Debt",
            Self::Gifts => "Gifts",
            Self::Other => "Other",
        }
    }

    /// Chart colour (hex) for this category
    pub fn color(&self) -> &'static str {
        match self {
            Self::Housing => "#3b82f6",
            Self::Transportation => "#ef4444",
            Self::Food => "#22c55e",
            Self::Utilities => "#f59e0b",
            Self::Insurance => "#8b5cf6",
            Self::Healthcare => "#ec4899",
            Self::Savings => "#6366f1",
            Self::Personal => "#14b8a6",
            Self::Entertainment => "#f97316",
            Self::Education => "#a855f7",
            Self::Debt => "#f43f5e",
            Self::Gifts => "#10b981",
            Self::Other => "#6b7280",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Housing,
            Self::Transportation,
            Self::Food,
            Self::Utilities,
            Self::Insurance,
            Self::Healthcare,
            Self::Savings,
            Self::Personal,
            Self::Entertainment,
            Self::Education,
            Self::Debt,
            Self::Gifts,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Always positive
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

/// User-submitted transaction fields, used for both create and full replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        validate_year(self.date.year())?;

        let description = self.description.trim();
        let len = description.chars().count();
        if description.is_empty() {
            return Err(Error::Validation("Description is required".to_string()));
        }
        if len < DESCRIPTION_MIN_LEN || len > DESCRIPTION_MAX_LEN {
            return Err(Error::Validation(format!(
                "Description must be between {} and {} characters",
                DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN
            )));
        }

        Ok(())
    }
}

/// A monthly spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: Category,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// User-submitted budget fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: Category,
    pub amount: f64,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

/// Budget update. The category is fixed once a budget exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetUpdate {
    pub amount: f64,
}

impl BudgetUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

/// Years outside 0000-9999 have no fixed-width RFC 3339 form and cannot be stored
fn validate_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::Validation(format!(
            "Date year must be between {:04} and {}",
            MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(
            "Amount must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Full snapshot of both collections at a point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

/// Parse a transaction date: RFC 3339 timestamp or plain `YYYY-MM-DD` (midnight UTC)
pub fn parse_date(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    let s = s.trim();
    let parsed = DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
        .ok_or_else(|| format!("Invalid date: {} (use YYYY-MM-DD or RFC 3339)", s))?;

    validate_year(parsed.year()).map_err(|_| {
        format!(
            "Invalid date: {} (year must be between {:04} and {})",
            s, MIN_YEAR, MAX_YEAR
        )
    })?;
    Ok(parsed)
}

fn deserialize_flexible_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
