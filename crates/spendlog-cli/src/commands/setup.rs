//! Setup command and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `close_db` - Release the database at the end of a command
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use spendlog_core::{Config, Database};
use tracing::debug;

/// Open the store, registering the configured categories if it is new
pub fn open_db(db_path: &Path, config: &Config) -> Result<Database> {
    open_db_registering(db_path, config).map(|(db, _)| db)
}

/// Open the store and report how many categories were registered
fn open_db_registering(db_path: &Path, config: &Config) -> Result<(Database, usize)> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    let is_new = !db_path.exists();

    let db = Database::open(path_str)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let mut seeded = 0;
    if is_new {
        seeded = db
            .ensure_categories(config.categories.iter().map(String::as_str))
            .context("Failed to register default categories")?;
        debug!("New database, registered {} categories", seeded);
    }

    Ok((db, seeded))
}

pub fn close_db(db: Database) -> Result<()> {
    db.close().context("Failed to close database")
}

/// Initialize the store, returning the number of categories registered
pub fn cmd_init(db_path: &Path, config: &Config) -> Result<usize> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let (db, mut seeded) = open_db_registering(db_path, config)?;

    // An existing store whose registry was emptied gets the list again
    seeded += db
        .ensure_categories(config.categories.iter().map(String::as_str))
        .context("Failed to register default categories")?;
    if seeded > 0 {
        println!("   Registered {} categories", seeded);
    }

    let count = db.count_expenses()?;
    if count > 0 {
        println!("   Existing store kept ({} expenses)", count);
    }

    close_db(db)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: spendlog add --category Food --amount 12.50");
    println!("  2. See totals: spendlog summary monthly");

    Ok(seeded)
}
