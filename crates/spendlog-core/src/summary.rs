//! Spending summaries
//!
//! [`Summarizer`] computes grouped totals over the expenses held by a
//! [`Database`]. Nothing is cached: every call re-reads the store.
//!
//! ## Ordering
//!
//! - Daily totals: descending by the raw date string.
//! - Monthly totals: descending by month key.
//! - Category totals: no defined order.
//!
//! ## Month keys
//!
//! The month key is the first seven characters of the stored date. For a
//! well-formed `YYYY-MM-DD` date that is `YYYY-MM`; for anything else it is
//! whatever those characters happen to be. Malformed dates are grouped, not
//! rejected or dropped.

use rusqlite::Row;

use crate::db::Database;
use crate::error::Result;
use crate::models::{Granularity, Total};

/// Computes aggregate totals from a borrowed store handle
#[derive(Debug, Clone, Copy)]
pub struct Summarizer<'a> {
    db: &'a Database,
}

impl<'a> Summarizer<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Totals grouped by exact date string, newest first
    pub fn daily_totals(&self) -> Result<Vec<Total>> {
        self.query_totals(
            r#"
            SELECT date, COALESCE(SUM(amount), 0)
            FROM expenses
            GROUP BY date
            ORDER BY date DESC
            "#,
        )
    }

    /// Totals grouped by month key, newest first
    pub fn monthly_totals(&self) -> Result<Vec<Total>> {
        self.query_totals(
            r#"
            SELECT substr(date, 1, 7) AS month, COALESCE(SUM(amount), 0)
            FROM expenses
            GROUP BY month
            ORDER BY month DESC
            "#,
        )
    }

    /// Totals grouped by category label, in no particular order
    pub fn category_totals(&self) -> Result<Vec<Total>> {
        self.query_totals(
            r#"
            SELECT category, COALESCE(SUM(amount), 0)
            FROM expenses
            GROUP BY category
            "#,
        )
    }

    pub fn totals(&self, granularity: Granularity) -> Result<Vec<Total>> {
        match granularity {
            Granularity::Daily => self.daily_totals(),
            Granularity::Monthly => self.monthly_totals(),
            Granularity::Category => self.category_totals(),
        }
    }

    /// Sum of every stored amount (0.0 for an empty store)
    pub fn grand_total(&self) -> Result<f64> {
        let total = self.db.conn().query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM expenses",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    fn query_totals(&self, sql: &str) -> Result<Vec<Total>> {
        let mut stmt = self.db.conn().prepare(sql)?;
        let totals = stmt
            .query_map([], row_to_total)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(totals)
    }
}

fn row_to_total(row: &Row) -> rusqlite::Result<Total> {
    Ok(Total {
        key: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
        total: row.get(1)?,
    })
}
