//! Dashboard and report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use spendwise_core::insights::{
    category_totals, compare_budgets, daily_series, dashboard_summary, parse_month,
    BudgetComparison, DailyExpense, DashboardSummary,
};
use spendwise_core::models::Category;

/// One slice of the category breakdown
#[derive(Debug, Serialize)]
pub struct CategoryReportRow {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
    pub amount: f64,
}

/// Query parameters for the daily report
#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    /// Month as YYYY-MM (default: current month)
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub month: String,
    pub total: f64,
    pub days: Vec<DailyExpense>,
}

/// GET /api/dashboard - Headline numbers and recent transactions
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSummary>, AppError> {
    let transactions = state.db.list_transactions()?;
    let summary = dashboard_summary(&transactions, state.insights.recent_transactions);
    Ok(Json(summary))
}

/// GET /api/reports/categories - Spend per category
pub async fn report_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryReportRow>>, AppError> {
    let transactions = state.db.list_transactions()?;

    let rows = category_totals(&transactions)
        .iter()
        .map(|spend| CategoryReportRow {
            category: spend.category,
            label: spend.category.label(),
            color: spend.category.color(),
            amount: spend.amount,
        })
        .collect();

    Ok(Json(rows))
}

/// GET /api/reports/budgets - Budgeted versus spent, per budget
pub async fn report_budgets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BudgetComparison>>, AppError> {
    let snapshot = state.db.snapshot()?;
    let comparisons = compare_budgets(&snapshot.budgets, &snapshot.transactions)?;
    Ok(Json(comparisons))
}

/// GET /api/reports/daily?month=YYYY-MM - Spend per day of a month
pub async fn report_daily(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DailyQuery>,
) -> Result<Json<DailyReport>, AppError> {
    let (year, month) = match params.month.as_deref() {
        Some(s) => parse_month(s)?,
        None => {
            let today = Utc::now().date_naive();
            (today.year(), today.month())
        }
    };

    let transactions = state.db.list_transactions()?;
    let days = daily_series(&transactions, year, month)?;
    let total = days.iter().map(|d| d.amount).sum();

    Ok(Json(DailyReport {
        month: format!("{:04}-{:02}", year, month),
        total,
        days,
    }))
}
