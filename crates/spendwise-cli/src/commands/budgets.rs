//! Budget command implementations

use anyhow::{Context, Result};
use spendwise_core::db::Database;
use spendwise_core::insights::{compare_budgets, unbudgeted_categories};
use spendwise_core::models::{BudgetUpdate, NewBudget};

use super::parse_category;

pub fn cmd_budgets_list(db: &Database) -> Result<()> {
    let snapshot = db.snapshot()?;

    if snapshot.budgets.is_empty() {
        println!("No budgets set. Create one with:");
        println!("  spendwise budgets add food 400");
        return Ok(());
    }

    let comparisons = compare_budgets(&snapshot.budgets, &snapshot.transactions)?;

    println!();
    println!("🎯 Budgets");
    println!("   ─────────────────────────────────────────────────────────────");

    for c in &comparisons {
        let marker = if c.over_budget { "🔴" } else { "🟢" };
        println!(
            "   {} {:<14} ${:>9.2} of ${:>9.2}  {:>3}%",
            marker,
            c.label,
            c.spent_amount,
            c.budget_amount,
            c.percent_used.round()
        );
    }

    let available = unbudgeted_categories(&snapshot.budgets);
    if !available.is_empty() {
        let labels: Vec<&str> = available.iter().map(|c| c.as_str()).collect();
        println!();
        println!("   Available categories: {}", labels.join(", "));
    }

    Ok(())
}

pub fn cmd_budgets_add(db: &Database, category: &str, amount: f64) -> Result<()> {
    let category = parse_category(category)?;

    let budget = db
        .create_budget(&NewBudget { category, amount })
        .with_context(|| format!("Failed to create budget for {}", category.label()))?;

    println!(
        "✅ Budget for {} set to ${:.2}",
        budget.category.label(),
        budget.amount
    );

    Ok(())
}

pub fn cmd_budgets_set(db: &Database, category: &str, amount: f64) -> Result<()> {
    let category = parse_category(category)?;

    let existing = db.get_budget_by_category(category)?.ok_or_else(|| {
        anyhow::anyhow!(
            "No budget for {}. Create one with 'spendwise budgets add {} <amount>'",
            category.label(),
            category
        )
    })?;

    let budget = db.update_budget(existing.id, &BudgetUpdate { amount })?;

    println!(
        "✅ Budget for {} changed from ${:.2} to ${:.2}",
        budget.category.label(),
        existing.amount,
        budget.amount
    );

    Ok(())
}

pub fn cmd_budgets_delete(db: &Database, category: &str) -> Result<()> {
    let category = parse_category(category)?;

    let existing = db
        .get_budget_by_category(category)?
        .ok_or_else(|| anyhow::anyhow!("No budget for {}", category.label()))?;

    db.delete_budget(existing.id)?;

    println!("🗑️  Removed budget for {}", category.label());

    Ok(())
}
