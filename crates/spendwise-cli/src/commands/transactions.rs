//! Transaction command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use spendwise_core::db::Database;
use spendwise_core::models::{parse_date, Category, NewTransaction, Transaction};

use super::{parse_category, truncate};

/// Fields to change on `transactions edit`; `None` keeps the current value
#[derive(Debug, Default)]
pub struct TransactionEdit {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub date: Option<String>,
    /// Category code, or "none" to clear
    pub category: Option<String>,
}

fn category_label(category: Option<Category>) -> &'static str {
    category.map(|c| c.label()).unwrap_or("Uncategorized")
}

fn print_transaction_row(tx: &Transaction) {
    println!(
        "   [{:>4}] {} │ {:>10} │ {:<14} │ {}",
        tx.id,
        tx.date.format("%Y-%m-%d"),
        format!("${:.2}", tx.amount),
        category_label(tx.category),
        truncate(&tx.description, 40)
    );
}

pub fn cmd_transactions_list(db: &Database, limit: usize) -> Result<()> {
    let transactions = db.list_transactions()?;

    if transactions.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  spendwise transactions add -a 12.50 -d \"Lunch\" -c food");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions.iter().take(limit) {
        print_transaction_row(tx);
    }

    if transactions.len() > limit {
        println!();
        println!(
            "   Showing {} of {}. Use --limit to see more.",
            limit,
            transactions.len()
        );
    }

    Ok(())
}

pub fn cmd_transactions_add(
    db: &Database,
    amount: f64,
    description: &str,
    date: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(s).map_err(anyhow::Error::msg)?,
        None => Utc::now(),
    };
    let category = category.map(parse_category).transpose()?;

    let tx = db
        .create_transaction(&NewTransaction {
            amount,
            date,
            description: description.trim().to_string(),
            category,
        })
        .context("Failed to record transaction")?;

    println!("✅ Recorded transaction {}:", tx.id);
    print_transaction_row(&tx);

    Ok(())
}

pub fn cmd_transactions_edit(db: &Database, id: i64, edit: TransactionEdit) -> Result<()> {
    let current = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    let date = match edit.date.as_deref() {
        Some(s) => parse_date(s).map_err(anyhow::Error::msg)?,
        None => current.date,
    };
    let category = match edit.category.as_deref() {
        Some(code) if code.eq_ignore_ascii_case("none") => None,
        Some(code) => Some(parse_category(code)?),
        None => current.category,
    };

    let replacement = NewTransaction {
        amount: edit.amount.unwrap_or(current.amount),
        date,
        description: edit
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or(current.description),
        category,
    };

    let tx = db
        .update_transaction(id, &replacement)
        .context("Failed to update transaction")?;

    println!("✅ Updated transaction {}:", id);
    print_transaction_row(&tx);

    Ok(())
}

pub fn cmd_transactions_delete(db: &Database, id: i64) -> Result<()> {
    let tx = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    db.delete_transaction(id)?;

    println!("🗑️  Deleted transaction {}:", id);
    print_transaction_row(&tx);

    Ok(())
}
