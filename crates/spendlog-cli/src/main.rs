//! Spendlog CLI - Personal expense tracker
//!
//! Usage:
//!   spendlog init                                   Initialize database
//!   spendlog add --category Food --amount 12.50     Record an expense
//!   spendlog summary monthly                        Show monthly totals
//!   spendlog export --output expenses.json          Export to JSON

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use spendlog_core::{Config, Granularity};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let db_path = config.resolve_db_path(cli.db.as_deref());

    match cli.command {
        Commands::Init => commands::cmd_init(&db_path, &config).map(|_| ()),
        Commands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let db = commands::open_db(&db_path, &config)?;
            commands::cmd_add(
                &db,
                &config,
                date.as_deref(),
                &category,
                &amount,
                &description,
            )?;
            commands::close_db(db)
        }
        Commands::List { limit } => {
            let db = commands::open_db(&db_path, &config)?;
            commands::cmd_list(&db, &config, limit)?;
            commands::close_db(db)
        }
        Commands::Update {
            id,
            date,
            category,
            amount,
            description,
        } => {
            let db = commands::open_db(&db_path, &config)?;
            commands::cmd_update(
                &db,
                &config,
                id,
                commands::ExpenseChanges {
                    date,
                    category,
                    amount,
                    description,
                },
            )?;
            commands::close_db(db)
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&db_path, &config)?;
            commands::cmd_delete(&db, id)?;
            commands::close_db(db)
        }
        Commands::Summary { granularity, json } => {
            let granularity: Granularity = granularity
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let db = commands::open_db(&db_path, &config)?;
            commands::cmd_summary(&db, &config, granularity, json)?;
            commands::close_db(db)
        }
        Commands::Export { output, format } => {
            let db = commands::open_db(&db_path, &config)?;
            let output = output.unwrap_or_else(|| config.export_path.clone());
            commands::cmd_export(&db, &output, format)?;
            commands::close_db(db)
        }
        Commands::Import { file } => {
            let mut db = commands::open_db(&db_path, &config)?;
            let file = file.unwrap_or_else(|| config.export_path.clone());
            commands::cmd_import(&mut db, &file)?;
            commands::close_db(db)
        }
        Commands::Categories { action } => {
            let db = commands::open_db(&db_path, &config)?;
            match action {
                None | Some(CategoriesAction::List) => commands::cmd_categories_list(&db)?,
                Some(CategoriesAction::Add { name }) => {
                    commands::cmd_categories_add(&db, &name)?;
                }
                Some(CategoriesAction::Remove { name }) => {
                    commands::cmd_categories_remove(&db, &name)?;
                }
            }
            commands::close_db(db)
        }
    }
}
