//! Database access layer and schema setup
//!
//! This module is organized by domain:
//! - `expenses` - Expense CRUD
//! - `categories` - Category registry
//!
//! Aggregations live in [`crate::summary`] and interchange in
//! [`crate::export`]; both go through the same [`Database`] handle.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

mod categories;
mod expenses;

/// Owned handle to a spendlog store
///
/// Holds a single SQLite connection for the life of the handle. The handle is
/// not shared between threads; callers that need one hold it and lend it out
/// by reference.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Open the store at `path`, creating it if absent
    ///
    /// Schema setup is idempotent, so opening an existing store never loses
    /// data.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn,
            db_path: path.to_string(),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Open a private in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn,
            db_path: ":memory:".to_string(),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Borrow the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Release the store handle
    ///
    /// Consumes the handle so nothing can use it afterwards.
    pub fn close(self) -> Result<()> {
        let path = self.db_path;
        self.conn.close().map_err(|(_, e)| e)?;
        debug!("Closed database {}", path);
        Ok(())
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            -- Synchronous NORMAL: good balance of safety and performance
            PRAGMA synchronous = NORMAL;

            -- Expenses
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,   -- AUTOINCREMENT: ids are never reused
                date TEXT,                              -- YYYY-MM-DD by convention, unchecked
                category TEXT,
                amount REAL,
                description TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
            CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);

            -- Category registry (suggested labels, not a foreign key target)
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE
            );
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
