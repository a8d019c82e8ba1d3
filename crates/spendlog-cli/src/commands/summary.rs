//! Summary command implementations

use anyhow::{Context, Result};
use spendlog_core::{Config, Database, Granularity, Summarizer, Total};

fn title(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Daily => "Daily Summary",
        Granularity::Monthly => "Monthly Summary",
        Granularity::Category => "Category Summary",
    }
}

pub fn cmd_summary(
    db: &Database,
    config: &Config,
    granularity: Granularity,
    json: bool,
) -> Result<Vec<Total>> {
    let summarizer = Summarizer::new(db);
    let mut totals = summarizer
        .totals(granularity)
        .with_context(|| format!("Failed to compute {} totals", granularity))?;

    // Category totals have no stored order; show the largest first
    if granularity == Granularity::Category {
        totals.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(totals);
    }

    println!();
    println!("📊 {}", title(granularity));
    println!("   ─────────────────────────────────────────────────────────────");

    if totals.is_empty() {
        println!("   No expenses recorded yet.");
        return Ok(totals);
    }

    for row in &totals {
        println!("   {}: {}", row.key, config.format_amount(row.total));
    }

    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Total: {}",
        config.format_amount(summarizer.grand_total()?)
    );

    Ok(totals)
}
