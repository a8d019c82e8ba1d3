//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use spendlog_core::config::DB_PATH_ENV;

/// Spendlog - Record expenses and see where the money goes
#[derive(Parser)]
#[command(name = "spendlog")]
#[command(about = "Personal expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (overrides the config file)
    #[arg(long, env = DB_PATH_ENV, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to ~/.config/spendlog/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and register the default categories
    Init,

    /// Record a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Category label (e.g., Food, Bills)
        #[arg(short, long)]
        category: String,

        /// Amount spent
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List recorded expenses
    List {
        /// Show only the most recent N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Change an expense (fields not given keep their value)
    Update {
        /// Expense ID
        id: i64,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: i64,
    },

    /// Show totals grouped by day, month or category
    Summary {
        /// Grouping: daily, monthly, category
        #[arg(default_value = "daily")]
        granularity: String,

        /// Print rows as JSON (for plotting tools)
        #[arg(long)]
        json: bool,
    },

    /// Export all expenses to a file
    Export {
        /// Output file (defaults to the configured export path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Import expenses from a JSON file (existing IDs are replaced)
    Import {
        /// Input file (defaults to the configured export path)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Manage the category registry (list, add, remove)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List registered categories
    List,

    /// Register a category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category (expenses keep their label)
    Remove {
        /// Category name
        name: String,
    },
}
