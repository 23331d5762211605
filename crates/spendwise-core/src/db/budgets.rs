//! Budget operations

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::transactions::format_timestamp;
use super::{parse_category, parse_timestamp, Database};
use crate::error::{Error, Result};
use crate::models::{Budget, BudgetUpdate, Category, NewBudget};

impl Database {
    /// List all budgets in creation order
    pub fn list_budgets(&self) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, category, amount, created_at FROM budgets ORDER BY id")?;

        let budgets = stmt
            .query_map([], Self::row_to_budget)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(budgets)
    }

    /// Get a budget by ID
    pub fn get_budget(&self, id: i64) -> Result<Option<Budget>> {
        let conn = self.conn()?;
        let budget = conn
            .query_row(
                "SELECT id, category, amount, created_at FROM budgets WHERE id = ?",
                params![id],
                Self::row_to_budget,
            )
            .optional()?;

        Ok(budget)
    }

    /// Get the budget for a category, if one exists
    pub fn get_budget_by_category(&self, category: Category) -> Result<Option<Budget>> {
        let conn = self.conn()?;
        let budget = conn
            .query_row(
                "SELECT id, category, amount, created_at FROM budgets WHERE category = ?",
                params![category.as_str()],
                Self::row_to_budget,
            )
            .optional()?;

        Ok(budget)
    }

    /// Create a budget. Fails with `CategoryConflict` if the category already has one.
    pub fn create_budget(&self, budget: &NewBudget) -> Result<Budget> {
        budget.validate()?;

        if self.get_budget_by_category(budget.category)?.is_some() {
            return Err(Error::CategoryConflict(budget.category));
        }

        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT INTO budgets (category, amount, created_at) VALUES (?, ?, ?)",
            params![
                budget.category.as_str(),
                budget.amount,
                format_timestamp(&Utc::now()),
            ],
        );

        // A concurrent insert can still trip the UNIQUE constraint after the check above
        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                return Err(Error::CategoryConflict(budget.category));
            }
            Err(e) => return Err(e.into()),
        }
        let id = conn.last_insert_rowid();
        drop(conn);

        debug!(id, category = %budget.category, amount = budget.amount, "Budget created");
        self.get_budget(id)?
            .ok_or_else(|| Error::NotFound(format!("Budget {} missing after insert", id)))
    }

    /// Change a budget's amount
    pub fn update_budget(&self, id: i64, update: &BudgetUpdate) -> Result<Budget> {
        update.validate()?;

        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE budgets SET amount = ? WHERE id = ?",
            params![update.amount, id],
        )?;
        drop(conn);

        if changed == 0 {
            return Err(Error::NotFound(format!("Budget {} not found", id)));
        }

        debug!(id, amount = update.amount, "Budget updated");
        self.get_budget(id)?
            .ok_or_else(|| Error::NotFound(format!("Budget {} not found", id)))
    }

    /// Delete a budget by ID
    pub fn delete_budget(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM budgets WHERE id = ?", params![id])?;

        if deleted == 0 {
            return Err(Error::NotFound(format!("Budget {} not found", id)));
        }

        debug!(id, "Budget deleted");
        Ok(())
    }

    fn row_to_budget(row: &Row<'_>) -> rusqlite::Result<Budget> {
        let category_str: String = row.get(1)?;
        let created_at_str: String = row.get(3)?;

        Ok(Budget {
            id: row.get(0)?,
            category: parse_category(&category_str)?,
            amount: row.get(2)?,
            created_at: parse_timestamp(&created_at_str)?,
        })
    }
}
