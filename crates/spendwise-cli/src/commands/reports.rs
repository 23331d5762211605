//! Dashboard, insight and report command implementations

use anyhow::Result;
use chrono::{Datelike, Utc};
use spendwise_core::db::Database;
use spendwise_core::insights::{
    category_totals, compare_budgets, daily_series, dashboard_summary, parse_month, InsightEngine,
    InsightKind,
};
use spendwise_core::models::Category;
use spendwise_core::InsightConfig;

use super::truncate;

/// Parse a YYYY-MM month argument, defaulting to the current month
pub fn resolve_month(month: Option<&str>) -> Result<(i32, u32)> {
    match month {
        Some(s) => Ok(parse_month(s)?),
        None => {
            let today = Utc::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}

fn kind_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Exceeded => "🔴",
        InsightKind::Warning => "🟠",
        InsightKind::Informational => "📊",
        InsightKind::Suggestion => "💡",
        InsightKind::Notable => "🔎",
    }
}

/// Proportional bar for terminal charts
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

pub fn cmd_dashboard(db: &Database, config: &InsightConfig) -> Result<()> {
    let transactions = db.list_transactions()?;
    let summary = dashboard_summary(&transactions, config.recent_transactions);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│         💰 Spendwise Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total expenses:  ${:.2}", summary.total_expenses);
    println!("  Transactions:    {}", summary.transaction_count);
    println!("  Average:         ${:.2}", summary.average_transaction);
    match summary.top_category {
        Some(top) => println!(
            "  Top category:    {} (${:.2})",
            top.category.label(),
            top.amount
        ),
        None => println!("  Top category:    -"),
    }

    if !summary.recent_transactions.is_empty() {
        println!();
        println!("  Recent:");
        for tx in &summary.recent_transactions {
            println!(
                "    {} │ {:>10} │ {}",
                tx.date.format("%b %-d"),
                format!("${:.2}", tx.amount),
                truncate(&tx.description, 40)
            );
        }
    }

    println!();
    Ok(())
}

pub fn cmd_insights(db: &Database, config: &InsightConfig) -> Result<()> {
    let snapshot = db.snapshot()?;
    let insights = InsightEngine::new(config.clone()).generate(&snapshot)?;

    if insights.is_empty() {
        if snapshot.budgets.is_empty() || snapshot.transactions.is_empty() {
            println!("Insights need at least one budget and one transaction.");
        } else {
            println!("✅ Nothing to report. Spending is within budget.");
        }
        return Ok(());
    }

    println!();
    println!("💡 Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    for insight in &insights {
        println!("   {} {}", kind_icon(insight.kind), insight.text);
    }
    println!();

    Ok(())
}

pub fn cmd_report_categories(db: &Database) -> Result<()> {
    let transactions = db.list_transactions()?;
    let totals = category_totals(&transactions);

    if totals.is_empty() {
        println!("No categorized spending yet.");
        return Ok(());
    }

    let max = totals.iter().map(|s| s.amount).fold(0.0, f64::max);
    let sum = totals.sum();

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");
    for spend in totals.iter() {
        println!(
            "   {:<14} ${:>9.2} {:>5.1}% {}",
            spend.category.label(),
            spend.amount,
            spend.amount / sum * 100.0,
            bar(spend.amount, max, 20)
        );
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:<14} ${:>9.2}", "Total", sum);

    Ok(())
}

pub fn cmd_report_budgets(db: &Database) -> Result<()> {
    let snapshot = db.snapshot()?;
    let comparisons = compare_budgets(&snapshot.budgets, &snapshot.transactions)?;

    if comparisons.is_empty() {
        println!("No budgets set.");
        return Ok(());
    }

    println!();
    println!("🎯 Budget vs Actual");
    println!("   ─────────────────────────────────────────────────────────────");
    for c in &comparisons {
        let status = if c.over_budget {
            format!("over by ${:.2}", c.overage_amount)
        } else {
            format!("${:.2} left", c.budget_amount - c.spent_amount)
        };
        println!(
            "   {:<14} ${:>9.2} / ${:>9.2} {:<20} {}",
            c.label,
            c.spent_amount,
            c.budget_amount,
            bar(c.progress as f64, 100.0, 20),
            status
        );
    }

    Ok(())
}

pub fn cmd_report_daily(db: &Database, month: Option<&str>) -> Result<()> {
    let (year, month) = resolve_month(month)?;
    let transactions = db.list_transactions()?;
    let series = daily_series(&transactions, year, month)?;

    let max = series.iter().map(|d| d.amount).fold(0.0, f64::max);
    let total: f64 = series.iter().map(|d| d.amount).sum();

    println!();
    println!("📅 Daily Spending {:04}-{:02}", year, month);
    println!("   ─────────────────────────────────────────────────────────────");
    for day in &series {
        println!(
            "   {} ${:>9.2} {}",
            day.date.format("%a %d"),
            day.amount,
            bar(day.amount, max, 30)
        );
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total  ${:>9.2}", total);

    Ok(())
}

pub fn cmd_categories(db: &Database) -> Result<()> {
    let budgets = db.list_budgets()?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");
    for category in Category::all() {
        let budget = budgets.iter().find(|b| b.category == *category);
        match budget {
            Some(b) => println!(
                "   {:<14} {:<14} budget ${:.2}",
                category.as_str(),
                category.label(),
                b.amount
            ),
            None => println!("   {:<14} {}", category.as_str(), category.label()),
        }
    }

    Ok(())
}
