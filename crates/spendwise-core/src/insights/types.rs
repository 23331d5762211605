//! Derived views produced by the aggregation engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Transaction};

/// What kind of observation an insight is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A budget has been overspent
    Exceeded,
    /// A budget is close to its limit
    Warning,
    /// Neutral observation (top spending category)
    Informational,
    /// Something the user could set up (missing budgets)
    Suggestion,
    /// A transaction worth calling out
    Notable,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Exceeded => "exceeded",
            InsightKind::Warning => "warning",
            InsightKind::Informational => "informational",
            InsightKind::Suggestion => "suggestion",
            InsightKind::Notable => "notable",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exceeded" => Ok(InsightKind::Exceeded),
            "warning" => Ok(InsightKind::Warning),
            "informational" => Ok(InsightKind::Informational),
            "suggestion" => Ok(InsightKind::Suggestion),
            "notable" => Ok(InsightKind::Notable),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// A natural-language observation about spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Total spend for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: Category,
    pub amount: f64,
}

/// Per-category totals in order of first appearance among the transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategorySpend>,
}

impl CategoryTotals {
    /// Add `amount` to `category`, appending it if not seen yet
    pub(crate) fn add(&mut self, category: Category, amount: f64) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategorySpend { category, amount }),
        }
    }

    /// Total for a category (0 when it has no transactions)
    pub fn get(&self, category: Category) -> f64 {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
            .unwrap_or(0.0)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.iter().any(|e| e.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategorySpend> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| e.category)
    }

    /// Sum over all categories
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Budgeted amount versus actual spend for one budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetComparison {
    pub budget_id: i64,
    pub category: Category,
    pub label: String,
    pub budget_amount: f64,
    pub spent_amount: f64,
    /// spent / budget * 100, uncapped
    pub percent_used: f64,
    /// Rounded percent capped at 100, for progress bars
    pub progress: u32,
    pub over_budget: bool,
    /// max(0, spent - budget)
    pub overage_amount: f64,
}

/// Spend on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyExpense {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Sum over all transactions, categorized or not
    pub total_expenses: f64,
    pub transaction_count: usize,
    /// 0 when there are no transactions
    pub average_transaction: f64,
    pub top_category: Option<CategorySpend>,
    pub recent_transactions: Vec<Transaction>,
}
