//! Aggregation Engine
//!
//! Derives everything the dashboards show from a snapshot of transactions and
//! budgets: category totals, budget comparisons, the top category, a daily
//! series for a month, and natural-language insights.
//!
//! All functions here are pure. Callers fetch a [`Snapshot`](crate::models::Snapshot)
//! once (see `Database::snapshot`) and pass it in.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendwise_core::insights::{compare_budgets, InsightEngine};
//!
//! let snapshot = db.snapshot()?;
//! let comparisons = compare_budgets(&snapshot.budgets, &snapshot.transactions)?;
//! let insights = InsightEngine::new(config).generate(&snapshot)?;
//! ```

pub mod aggregate;
pub mod engine;
pub mod rules;
pub mod types;

pub use aggregate::{
    category_total, category_totals, compare_budgets, daily_series, dashboard_summary,
    month_bounds, parse_month, top_category, total_spend, unbudgeted_categories,
};
pub use engine::{AnalysisContext, InsightEngine, InsightRule};
pub use rules::{
    LargeTransactionRule, NearLimitRule, OverBudgetRule, TopCategoryRule, UnbudgetedCategoriesRule,
};
pub use types::{
    BudgetComparison, CategorySpend, CategoryTotals, DailyExpense, DashboardSummary, Insight,
    InsightKind,
};
