//! Export/import command implementations

use std::path::Path;

use anyhow::{Context, Result};
use spendlog_core::{Database, ImportStats};

use crate::cli::ExportFormat;

pub fn cmd_export(db: &Database, output: &Path, format: ExportFormat) -> Result<usize> {
    let count = match format {
        ExportFormat::Json => db.export_to_file(output),
        ExportFormat::Csv => db.export_csv(output),
    }
    .with_context(|| format!("Failed to export data to {}", output.display()))?;

    println!("✅ Exported {} expenses to {}", count, output.display());
    Ok(count)
}

pub fn cmd_import(db: &mut Database, file: &Path) -> Result<ImportStats> {
    let stats = db
        .import_from_file(file)
        .with_context(|| format!("Failed to import data from {}", file.display()))?;

    println!("✅ Imported {} expenses from {}", stats.total(), file.display());
    println!("   New: {}", stats.inserted);
    println!("   Replaced: {}", stats.updated);
    Ok(stats)
}
