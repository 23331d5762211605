//! Pure aggregations over a snapshot of transactions and budgets
//!
//! Nothing here touches the database; every function is a deterministic
//! function of the slices it is given.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::models::{Budget, Category, Transaction};

use super::types::{BudgetComparison, CategorySpend, CategoryTotals, DailyExpense, DashboardSummary};

/// Sum of amounts per category. Uncategorized transactions are skipped.
pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for tx in transactions {
        if let Some(category) = tx.category {
            totals.add(category, tx.amount);
        }
    }
    totals
}

/// Sum of amounts for a single category
pub fn category_total(transactions: &[Transaction], category: Category) -> f64 {
    transactions
        .iter()
        .filter(|t| t.category == Some(category))
        .map(|t| t.amount)
        .sum()
}

/// Sum of all amounts, including uncategorized transactions
pub fn total_spend(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Compare every budget against what was spent in its category.
///
/// Output order follows `budgets`. A budget whose amount is not a positive
/// finite number yields `Error::InvalidBudget` instead of an infinite or NaN
/// percentage.
pub fn compare_budgets(
    budgets: &[Budget],
    transactions: &[Transaction],
) -> Result<Vec<BudgetComparison>> {
    let totals = category_totals(transactions);
    compare_budgets_with_totals(budgets, &totals)
}

pub(crate) fn compare_budgets_with_totals(
    budgets: &[Budget],
    totals: &CategoryTotals,
) -> Result<Vec<BudgetComparison>> {
    budgets
        .iter()
        .map(|budget| {
            if !budget.amount.is_finite() || budget.amount <= 0.0 {
                return Err(Error::InvalidBudget {
                    category: budget.category,
                    amount: budget.amount,
                });
            }

            let spent = totals.get(budget.category);
            let percent_used = spent / budget.amount * 100.0;
            let overage_amount = (spent - budget.amount).max(0.0);

            Ok(BudgetComparison {
                budget_id: budget.id,
                category: budget.category,
                label: budget.category.label().to_string(),
                budget_amount: budget.amount,
                spent_amount: spent,
                percent_used,
                progress: percent_used.round().min(100.0) as u32,
                over_budget: spent > budget.amount,
                overage_amount,
            })
        })
        .collect()
}

/// Category with the highest total.
///
/// Ties go to the category that appeared first. Returns `None` when no
/// category has positive spend.
pub fn top_category(totals: &CategoryTotals) -> Option<CategorySpend> {
    let mut best: Option<CategorySpend> = None;
    for entry in totals.iter() {
        if entry.amount <= 0.0 {
            continue;
        }
        match best {
            Some(current) if entry.amount <= current.amount => {}
            _ => best = Some(*entry),
        }
    }
    best
}

/// Parse a `YYYY-MM` month into (year, month)
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| Error::Validation(format!("Invalid month: {} (expected YYYY-MM)", s)))
}

/// First and last day of a calendar month
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let invalid = || Error::Validation(format!("Invalid month: {}-{:02}", year, month));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;

    Ok((first, last))
}

/// Spend per calendar day of a month, one entry for every day.
///
/// Transactions are bucketed by their UTC calendar day; those outside the
/// month are ignored.
pub fn daily_series(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Result<Vec<DailyExpense>> {
    let (first, last) = month_bounds(year, month)?;

    let mut series: Vec<DailyExpense> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| DailyExpense { date, amount: 0.0 })
        .collect();

    for tx in transactions {
        let day = tx.date.date_naive();
        if day < first || day > last {
            continue;
        }
        let index = (day - first).num_days() as usize;
        if let Some(entry) = series.get_mut(index) {
            entry.amount += tx.amount;
        }
    }

    Ok(series)
}

/// Categories that do not have a budget yet, in enumeration order
pub fn unbudgeted_categories(budgets: &[Budget]) -> Vec<Category> {
    Category::all()
        .iter()
        .copied()
        .filter(|c| !budgets.iter().any(|b| b.category == *c))
        .collect()
}

/// Headline totals plus the `recent` most recent transactions
pub fn dashboard_summary(transactions: &[Transaction], recent: usize) -> DashboardSummary {
    let total_expenses = total_spend(transactions);
    let transaction_count = transactions.len();
    let average_transaction = if transaction_count > 0 {
        total_expenses / transaction_count as f64
    } else {
        0.0
    };

    let mut by_date: Vec<Transaction> = transactions.to_vec();
    // Stable sort keeps input order among same-date transactions
    by_date.sort_by(|a, b| b.date.cmp(&a.date));
    by_date.truncate(recent);

    DashboardSummary {
        total_expenses,
        transaction_count,
        average_transaction,
        top_category: top_category(&category_totals(transactions)),
        recent_transactions: by_date,
    }
}
