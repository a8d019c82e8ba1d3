//! Export and import of expenses
//!
//! Supports:
//! - JSON interchange files: an array of `{id, date, category, amount, description}`
//!   objects, written in storage order and read back with upsert-by-id
//! - CSV export of the same columns for spreadsheets

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rusqlite::params;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{Expense, NewExpense};

/// One expense in an interchange file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl From<Expense> for ExpenseRecord {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date,
            category: expense.category,
            amount: expense.amount,
            description: expense.description,
        }
    }
}

/// Import statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Records whose id was not in the store
    pub inserted: i64,
    /// Records that replaced an existing expense
    pub updated: i64,
}

impl ImportStats {
    pub fn total(&self) -> i64 {
        self.inserted + self.updated
    }
}

impl Database {
    /// Export every expense as interchange records, in storage order
    pub fn export_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        let records = self
            .list_expenses()?
            .into_iter()
            .map(ExpenseRecord::from)
            .collect();
        Ok(records)
    }

    /// Write every expense to `path` as a JSON array, replacing the file
    ///
    /// Returns the number of records written.
    pub fn export_to_file(&self, path: &Path) -> Result<usize> {
        let records = self.export_expenses()?;

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Exported {} expenses to {}", records.len(), path.display());
        Ok(records.len())
    }

    /// Write every expense to `path` as CSV, replacing the file
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let records = self.export_expenses()?;

        let mut writer = csv::Writer::from_path(path)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!("Exported {} expenses to {}", records.len(), path.display());
        Ok(records.len())
    }

    /// Read a JSON interchange file and upsert every record
    ///
    /// Fails with `Error::Io` if the file cannot be opened and with
    /// `Error::MalformedInput` if it is not a JSON array of complete records.
    pub fn import_from_file(&mut self, path: &Path) -> Result<ImportStats> {
        let reader = BufReader::new(File::open(path)?);
        let records = parse_records(reader)?;

        let stats = self.import_expenses(&records)?;
        info!(
            "Imported {} expenses from {} ({} new, {} replaced)",
            stats.total(),
            path.display(),
            stats.inserted,
            stats.updated
        );
        Ok(stats)
    }

    /// Upsert interchange records by id
    ///
    /// An existing id is replaced in place and a new id is inserted with that
    /// id. All records are applied in one transaction: if any record is
    /// rejected, the store is left unchanged.
    pub fn import_expenses(&mut self, records: &[ExpenseRecord]) -> Result<ImportStats> {
        for (index, record) in records.iter().enumerate() {
            record_fields(record).validate().map_err(|e| {
                Error::MalformedInput(format!("record {} (id {}): {}", index, record.id, e))
            })?;
        }

        let tx = self.conn_mut().transaction()?;
        let mut stats = ImportStats::default();
        {
            let mut exists = tx.prepare("SELECT 1 FROM expenses WHERE id = ?1")?;
            let mut upsert = tx.prepare(
                r#"
                INSERT INTO expenses (id, date, category, amount, description)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(id) DO UPDATE SET
                    date = excluded.date,
                    category = excluded.category,
                    amount = excluded.amount,
                    description = excluded.description
                "#,
            )?;

            for record in records {
                if exists.exists(params![record.id])? {
                    stats.updated += 1;
                } else {
                    stats.inserted += 1;
                }
                upsert.execute(params![
                    record.id,
                    record.date,
                    record.category,
                    record.amount,
                    record.description,
                ])?;
            }
        }
        tx.commit()?;

        Ok(stats)
    }
}

/// Parse an interchange document into records
pub fn parse_records<R: std::io::Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    serde_json::from_reader(reader).map_err(|e| Error::MalformedInput(e.to_string()))
}

fn record_fields(record: &ExpenseRecord) -> NewExpense {
    NewExpense::new(
        record.date.clone(),
        record.category.clone(),
        record.amount,
        record.description.clone(),
    )
}
