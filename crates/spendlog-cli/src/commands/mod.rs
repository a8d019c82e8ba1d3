//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `categories` - Category registry commands
//! - `expenses` - Expense commands (add, list, update, delete)
//! - `interchange` - JSON/CSV export and JSON import
//! - `setup` - Database setup (init) and shared utilities (open_db, close_db)
//! - `summary` - Daily, monthly and category totals

pub mod categories;
pub mod expenses;
pub mod interchange;
pub mod setup;
pub mod summary;

// Re-export command functions for main.rs
pub use categories::*;
pub use expenses::*;
pub use interchange::*;
pub use setup::*;
pub use summary::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
