//! Category registry operations

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{Category, DEFAULT_CATEGORIES};

impl Database {
    /// List registered categories ordered by name
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name FROM categories ORDER BY name COLLATE NOCASE")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Check whether `name` is registered (exact match)
    pub fn has_category(&self, name: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn()
            .query_row(
                "SELECT id FROM categories WHERE name = ?",
                params![name.trim()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Register a category, returning its id
    ///
    /// Registering an existing name returns the existing id.
    pub fn add_category(&self, name: &str) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "category name is required".to_string(),
            ));
        }

        self.conn().execute(
            "INSERT OR IGNORE INTO categories (name) VALUES (?)",
            params![name],
        )?;

        let id = self.conn().query_row(
            "SELECT id FROM categories WHERE name = ?",
            params![name],
            |row| row.get(0),
        )?;

        debug!("Registered category {} ({})", name, id);
        Ok(id)
    }

    /// Remove a category from the registry
    ///
    /// Expenses carrying the label keep it. Returns `false` without error when
    /// the name is not registered.
    pub fn remove_category(&self, name: &str) -> Result<bool> {
        let changed = self
            .conn()
            .execute("DELETE FROM categories WHERE name = ?", params![name.trim()])?;
        Ok(changed > 0)
    }

    /// Insert the suggested categories that are not yet registered
    ///
    /// Returns the number of categories added.
    pub fn seed_default_categories(&self) -> Result<usize> {
        self.seed_categories(DEFAULT_CATEGORIES.iter().copied())
    }

    /// Seed the registry with `names` only if it has no entries yet
    ///
    /// Returns the number of categories added (0 when the registry was
    /// already populated).
    pub fn ensure_categories<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<usize> {
        let count: i64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let added = self.seed_categories(names)?;
        debug!("Seeded {} categories", added);
        Ok(added)
    }

    /// Insert the given categories that are not yet registered
    pub fn seed_categories<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<usize> {
        let mut stmt = self
            .conn()
            .prepare("INSERT OR IGNORE INTO categories (name) VALUES (?)")?;

        let mut added = 0;
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            added += stmt.execute(params![name])?;
        }

        Ok(added)
    }
}
