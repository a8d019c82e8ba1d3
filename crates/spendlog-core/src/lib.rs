//! Spendlog Core Library
//!
//! Persistence and aggregation for the spendlog personal expense tracker:
//! - SQLite expense store with schema setup and CRUD
//! - Category registry seeded with the suggested labels
//! - Daily, monthly and per-category totals
//! - JSON interchange (export/import with upsert) and CSV export
//! - TOML configuration with platform-directory defaults

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod summary;

pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use export::{ExpenseRecord, ImportStats};
pub use models::{Category, Expense, Granularity, NewExpense, Total};
pub use summary::Summarizer;
