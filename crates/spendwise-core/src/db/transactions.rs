//! Transaction operations

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{parse_category, parse_timestamp, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

const TRANSACTION_COLUMNS: &str = "id, amount, date, description, category, created_at";

/// Fixed-width UTC timestamp so text ordering matches time ordering
pub(crate) fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

impl Database {
    /// List all transactions, newest first
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions ORDER BY date DESC, id DESC",
            TRANSACTION_COLUMNS
        ))?;

        let transactions = stmt
            .query_map([], Self::row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let tx = conn
            .query_row(
                &format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS),
                params![id],
                Self::row_to_transaction,
            )
            .optional()?;

        Ok(tx)
    }

    /// Record a new transaction and return it with its assigned ID
    pub fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        tx.validate()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO transactions (amount, date, description, category, created_at) VALUES (?, ?, ?, ?, ?)",
            params![
                tx.amount,
                format_timestamp(&tx.date),
                tx.description.trim(),
                tx.category.map(|c| c.as_str()),
                format_timestamp(&Utc::now()),
            ],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        debug!(id, amount = tx.amount, "Transaction created");
        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {} missing after insert", id)))
    }

    /// Replace amount, date, description and category of an existing transaction
    pub fn update_transaction(&self, id: i64, tx: &NewTransaction) -> Result<Transaction> {
        tx.validate()?;

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE transactions SET amount = ?, date = ?, description = ?, category = ? WHERE id = ?",
            params![
                tx.amount,
                format_timestamp(&tx.date),
                tx.description.trim(),
                tx.category.map(|c| c.as_str()),
                id,
            ],
        )?;
        drop(conn);

        if changed == 0 {
            return Err(Error::NotFound(format!("Transaction {} not found", id)));
        }

        debug!(id, "Transaction updated");
        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {} not found", id)))
    }

    /// Delete a transaction by ID
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;

        if deleted == 0 {
            return Err(Error::NotFound(format!("Transaction {} not found", id)));
        }

        debug!(id, "Transaction deleted");
        Ok(())
    }

    fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(2)?;
        let category_str: Option<String> = row.get(4)?;
        let created_at_str: String = row.get(5)?;

        Ok(Transaction {
            id: row.get(0)?,
            amount: row.get(1)?,
            date: parse_timestamp(&date_str)?,
            description: row.get(3)?,
            category: category_str.as_deref().map(parse_category).transpose()?,
            created_at: parse_timestamp(&created_at_str)?,
        })
    }
}
