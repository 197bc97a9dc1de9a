//! Output formatting utilities
//!
//! Lists render as tables by default; single results as a styled line. The
//! structured formats print the underlying entities unchanged, so
//! `--format json` output reads back with the same field names the store uses.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::io;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::truncate_str;
use crate::cli::OutputFormat;
use crate::core::ledger::total_units;
use crate::core::{LocationStock, Outcome, Summary};
use crate::entities::{LogEntry, Product};

/// Widest bar in the location chart
const CHART_WIDTH: usize = 40;

/// Determine the effective output format based on context
///
/// `Auto` becomes a table for lists and stays `Auto` (plain text) otherwise.
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto if is_list => OutputFormat::Table,
        other => other,
    }
}

/// Print any serializable value as JSON or YAML
pub fn print_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
        }
        _ => {
            print!("{}", serde_yml::to_string(value).into_diagnostic()?);
        }
    }
    Ok(())
}

fn write_csv<R: Serialize>(rows: impl IntoIterator<Item = R>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for row in rows {
        writer.serialize(row).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}

fn print_table<R: Tabled>(rows: impl IntoIterator<Item = R>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

// =========================================================================
// Products
// =========================================================================

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "QTY")]
    qty: u64,
    #[tabled(rename = "LOCATION")]
    location: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

impl ProductRow {
    fn new(product: &Product, default_min: u64, width: Option<usize>) -> Self {
        let clip = |s: &str| match width {
            Some(w) => truncate_str(s, w),
            None => s.to_string(),
        };
        Self {
            name: clip(&product.name),
            sku: product.sku.clone(),
            category: clip(&product.category),
            qty: product.quantity,
            location: clip(&product.location),
            status: if product.is_low_stock(default_min) {
                "LOW".to_string()
            } else {
                "OK".to_string()
            },
        }
    }
}

/// Print a product list
pub fn print_products(products: &[Product], format: OutputFormat, default_min: u64) -> Result<()> {
    match effective_format(format, true) {
        OutputFormat::Json | OutputFormat::Yaml => print_structured(products, format)?,
        OutputFormat::Csv => {
            write_csv(products.iter().map(|p| ProductRow::new(p, default_min, None)))?
        }
        _ => {
            if products.is_empty() {
                println!("No products found.");
                return Ok(());
            }
            print_table(
                products
                    .iter()
                    .map(|p| ProductRow::new(p, default_min, Some(30))),
            );
            let units = total_units(products);
            println!(
                "{} product(s), {} unit(s)",
                style(products.len()).cyan(),
                style(units).cyan()
            );
        }
    }
    Ok(())
}

// =========================================================================
// Activity log
// =========================================================================

#[derive(Tabled, Serialize)]
struct LogRow {
    #[tabled(rename = "TIME")]
    time: String,
    #[tabled(rename = "TYPE")]
    log_type: String,
    #[tabled(rename = "ACTION")]
    action: String,
    #[tabled(rename = "DETAILS")]
    details: String,
}

impl From<&LogEntry> for LogRow {
    fn from(entry: &LogEntry) -> Self {
        Self {
            time: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            log_type: entry.log_type.to_string(),
            action: entry.action.to_string(),
            details: entry.details.clone(),
        }
    }
}

/// Print log entries in the order given
pub fn print_log(entries: &[LogEntry], format: OutputFormat) -> Result<()> {
    match effective_format(format, true) {
        OutputFormat::Json | OutputFormat::Yaml => print_structured(entries, format)?,
        OutputFormat::Csv => write_csv(entries.iter().map(LogRow::from))?,
        _ => {
            if entries.is_empty() {
                println!("No activity recorded.");
                return Ok(());
            }
            print_table(entries.iter().map(LogRow::from));
        }
    }
    Ok(())
}

// =========================================================================
// Command outcomes
// =========================================================================

/// Print the result of a single command
pub fn print_outcome(outcome: &Outcome, format: OutputFormat, default_min: u64) -> Result<()> {
    match effective_format(format, false) {
        OutputFormat::Json | OutputFormat::Yaml => print_structured(outcome, format)?,
        OutputFormat::Csv => match &outcome.product {
            Some(product) => write_csv([ProductRow::new(product, default_min, None)])?,
            None => println!("{}", outcome.message),
        },
        _ => {
            println!(
                "{} {} {}",
                style("✓").green(),
                style(format!("[{}]", outcome.action.label())).dim(),
                outcome.message
            );
            if let Some(product) = &outcome.product {
                if product.is_low_stock(default_min) {
                    println!(
                        "  {} {} is low on stock ({} left)",
                        style("!").yellow(),
                        product.name,
                        product.quantity
                    );
                }
            }
            if let Some(summary) = &outcome.summary {
                print_summary_text(summary);
            }
        }
    }
    Ok(())
}

// =========================================================================
// Report
// =========================================================================

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a Summary,
    locations: &'a [LocationStock],
    low_stock: &'a [Product],
}

/// Print summary metrics, the low-stock list and stock by location
pub fn print_report(
    summary: &Summary,
    locations: &[LocationStock],
    low_stock: &[Product],
    format: OutputFormat,
) -> Result<()> {
    match effective_format(format, false) {
        OutputFormat::Json | OutputFormat::Yaml => print_structured(
            &Report {
                summary,
                locations,
                low_stock,
            },
            format,
        )?,
        OutputFormat::Csv => write_csv(locations)?,
        _ => {
            print_summary_text(summary);

            if !low_stock.is_empty() {
                println!();
                println!("{}", style("Low stock").yellow().bold());
                for product in low_stock {
                    println!(
                        "  {} {} ({} at {})",
                        style("!").yellow(),
                        product.name,
                        product.quantity,
                        product.location
                    );
                }
            }

            println!();
            println!("{}", style("Stock by location").bold());
            print_location_chart(locations);
        }
    }
    Ok(())
}

fn print_summary_text(summary: &Summary) {
    println!("{}", style("Inventory summary").bold());
    println!("  Total units:      {}", style(summary.total_units).cyan());
    println!("  Unique products:  {}", style(summary.unique_products).cyan());
    let low = if summary.low_stock > 0 {
        style(summary.low_stock).yellow()
    } else {
        style(summary.low_stock).green()
    };
    println!("  Low stock items:  {}", low);
    match &summary.last_activity {
        Some(entry) => println!(
            "  Last activity:    {} {}",
            style(entry.timestamp.format("%Y-%m-%d %H:%M")).dim(),
            entry.details
        ),
        None => println!("  Last activity:    {}", style("none").dim()),
    }
}

/// Horizontal bar chart, one row per location
pub fn print_location_chart(locations: &[LocationStock]) {
    if locations.is_empty() {
        println!("  {}", style("No stock on hand.").dim());
        return;
    }

    let label_width = locations
        .iter()
        .map(|l| l.location.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    for row in locations {
        println!(
            "  {:<width$}  {} {}",
            truncate_str(&row.location, 24),
            style(bar(row.quantity, locations)).cyan(),
            row.quantity,
            width = label_width
        );
    }
}

fn bar(quantity: u64, locations: &[LocationStock]) -> String {
    let max = locations.iter().map(|l| l.quantity).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }
    let len = ((quantity as f64 / max as f64) * CHART_WIDTH as f64).round() as usize;
    "█".repeat(len.max(usize::from(quantity > 0)))
}
