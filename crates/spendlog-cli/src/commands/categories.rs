//! Category registry command implementations

use anyhow::{Context, Result};
use spendlog_core::Database;

pub fn cmd_categories_list(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;

    if categories.is_empty() {
        println!("No categories registered. Add one with:");
        println!("  spendlog categories add Groceries");
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────");
    for category in &categories {
        println!("   {}", category.name);
    }

    Ok(())
}

pub fn cmd_categories_add(db: &Database, name: &str) -> Result<i64> {
    let id = db
        .add_category(name)
        .with_context(|| format!("Failed to add category '{}'", name))?;
    println!("✅ Category '{}' registered", name.trim());
    Ok(id)
}

pub fn cmd_categories_remove(db: &Database, name: &str) -> Result<bool> {
    let removed = db
        .remove_category(name)
        .with_context(|| format!("Failed to remove category '{}'", name))?;

    if removed {
        println!("✅ Category '{}' removed", name.trim());
        println!("   Existing expenses keep this label.");
    } else {
        println!("Category '{}' is not registered; nothing changed.", name.trim());
    }

    Ok(removed)
}
