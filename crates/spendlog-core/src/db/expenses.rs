//! Expense operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::Database;
use crate::error::Result;
use crate::models::{Expense, NewExpense};

impl Database {
    /// Insert a new expense and return its id
    pub fn create_expense(&self, expense: &NewExpense) -> Result<i64> {
        expense.validate()?;

        self.conn().execute(
            r#"
            INSERT INTO expenses (date, category, amount, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                expense.date,
                expense.category,
                expense.amount,
                expense.description,
            ],
        )?;

        let id = self.conn().last_insert_rowid();
        debug!("Created expense {}", id);
        Ok(id)
    }

    /// List every expense in storage order (insertion order)
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, date, category, amount, description FROM expenses ORDER BY id",
        )?;

        let expenses = stmt
            .query_map([], |row| Self::row_to_expense(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Get a single expense by id
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let expense = self
            .conn()
            .query_row(
                "SELECT id, date, category, amount, description FROM expenses WHERE id = ?",
                params![id],
                |row| Self::row_to_expense(row),
            )
            .optional()?;

        Ok(expense)
    }

    /// Count stored expenses
    pub fn count_expenses(&self) -> Result<i64> {
        let count = self
            .conn()
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Replace every field of the expense with `id`
    ///
    /// Returns `false` without error when no expense has that id.
    pub fn update_expense(&self, id: i64, expense: &NewExpense) -> Result<bool> {
        expense.validate()?;

        let changed = self.conn().execute(
            r#"
            UPDATE expenses
            SET date = ?1, category = ?2, amount = ?3, description = ?4
            WHERE id = ?5
            "#,
            params![
                expense.date,
                expense.category,
                expense.amount,
                expense.description,
                id,
            ],
        )?;

        debug!("Updated expense {} ({} rows)", id, changed);
        Ok(changed > 0)
    }

    /// Delete the expense with `id`
    ///
    /// Returns `false` without error when no expense has that id.
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn()
            .execute("DELETE FROM expenses WHERE id = ?", params![id])?;

        debug!("Deleted expense {} ({} rows)", id, changed);
        Ok(changed > 0)
    }

    /// Map a row selected as (id, date, category, amount, description)
    pub(crate) fn row_to_expense(row: &Row) -> rusqlite::Result<Expense> {
        Ok(Expense {
            id: row.get(0)?,
            date: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            category: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            amount: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
            description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    }
}
