//! Expense command implementations

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use spendlog_core::{Config, Database, Expense, NewExpense};

use super::truncate;

/// Field changes requested by `spendlog update`
#[derive(Debug, Default)]
pub struct ExpenseChanges {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Amount must be a number, got '{}'", input))?;
    if !amount.is_finite() {
        anyhow::bail!("Amount must be a finite number, got '{}'", input);
    }
    Ok(amount)
}

/// Parse a user-entered date and normalize it to YYYY-MM-DD
pub fn parse_date(input: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD)", input))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

pub fn cmd_add(
    db: &Database,
    config: &Config,
    date: Option<&str>,
    category: &str,
    amount: &str,
    description: &str,
) -> Result<i64> {
    let category = category.trim();
    if category.is_empty() {
        anyhow::bail!("Category is required");
    }
    let amount = parse_amount(amount)?;
    let date = match date {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    if !db.has_category(category)? {
        println!(
            "   ⚠️  '{}' is not a registered category (see 'spendlog categories')",
            category
        );
    }

    let expense = NewExpense::new(date, category, amount, description.trim());
    let id = db
        .create_expense(&expense)
        .context("Failed to record expense")?;

    println!(
        "✅ Recorded expense {}: {} │ {} │ {}",
        id,
        expense.date,
        config.format_amount(expense.amount),
        expense.category
    );

    Ok(id)
}

pub fn cmd_list(db: &Database, config: &Config, limit: Option<usize>) -> Result<()> {
    let expenses = db.list_expenses()?;

    if expenses.is_empty() {
        println!("No expenses recorded yet. Add one with:");
        println!("  spendlog add --category Food --amount 12.50");
        return Ok(());
    }

    let shown = match limit {
        Some(n) if n < expenses.len() => &expenses[expenses.len() - n..],
        _ => &expenses[..],
    };

    println!();
    println!("📝 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    for expense in shown {
        print_expense(expense, config);
    }

    let total: f64 = shown.iter().map(|e| e.amount).sum();
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {} shown of {} │ Total {}",
        shown.len(),
        expenses.len(),
        config.format_amount(total)
    );

    Ok(())
}

pub fn cmd_update(
    db: &Database,
    config: &Config,
    id: i64,
    changes: ExpenseChanges,
) -> Result<bool> {
    let Some(existing) = db.get_expense(id)? else {
        println!("No expense with ID {}; nothing changed.", id);
        return Ok(false);
    };

    let date = match changes.date.as_deref() {
        Some(d) => parse_date(d)?,
        None => existing.date,
    };
    let amount = match changes.amount.as_deref() {
        Some(a) => parse_amount(a)?,
        None => existing.amount,
    };
    let category = changes
        .category
        .map(|c| c.trim().to_string())
        .unwrap_or(existing.category);
    let description = changes
        .description
        .map(|d| d.trim().to_string())
        .unwrap_or(existing.description);

    let expense = NewExpense::new(date, category, amount, description);
    let updated = db
        .update_expense(id, &expense)
        .with_context(|| format!("Failed to update expense {}", id))?;

    if updated {
        println!("✅ Updated expense {}:", id);
        if let Some(expense) = db.get_expense(id)? {
            print_expense(&expense, config);
        }
    } else {
        println!("No expense with ID {}; nothing changed.", id);
    }

    Ok(updated)
}

pub fn cmd_delete(db: &Database, id: i64) -> Result<bool> {
    let deleted = db
        .delete_expense(id)
        .with_context(|| format!("Failed to delete expense {}", id))?;

    if deleted {
        println!("✅ Deleted expense {}", id);
    } else {
        println!("No expense with ID {}; nothing changed.", id);
    }

    Ok(deleted)
}

fn print_expense(expense: &Expense, config: &Config) {
    println!(
        "   [{}] {} │ {:>10} │ {:15} │ {}",
        expense.id,
        expense.date,
        config.format_amount(expense.amount),
        truncate(&expense.category, 15),
        truncate(&expense.description, 30)
    );
}
