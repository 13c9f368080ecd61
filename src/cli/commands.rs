//! Command dispatch for the catalog processor CLI
//!
//! Wires parsed arguments into the processing core and renders results as
//! either a colored human summary or JSON.

use anyhow::Context;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::app::models::PricePoint;
use crate::app::services::stats_aggregator::{BasicStats, DashboardStats};
use crate::cli::args::{Args, Commands, OutputFormat};
use crate::{CatalogProcessor, CatalogSnapshot};

/// Run the selected subcommand to completion
pub fn run(args: Args) -> anyhow::Result<()> {
    init_logging(args.get_log_level());

    let config = args.to_config();
    config.validate().context("Invalid configuration")?;
    let processor = CatalogProcessor::new(config);

    match &args.command {
        Commands::Process => {
            let snapshot = processor
                .process()
                .context("Failed to process the catalog")?;
            print_snapshot(&snapshot, &args.output_format)
        }
        Commands::Stats => {
            let stats = processor
                .basic_stats()
                .context("Failed to compute catalog statistics")?;
            print_basic_stats(&stats, &args.output_format)
        }
        Commands::Dashboard => {
            let stats = processor
                .dashboard_stats()
                .context("Failed to compute dashboard statistics")?;
            print_dashboard_stats(&stats, &args.output_format)
        }
        Commands::History { sku } => {
            let history = processor.product_history(sku);
            print_history(sku, &history, &args.output_format)
        }
    }
}

/// Initialize tracing to stderr, honoring RUST_LOG when set
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn print_snapshot(snapshot: &CatalogSnapshot, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
        OutputFormat::Human => {
            println!("{}", "Catalog processed".bold());
            println!("  Products:         {}", snapshot.product_count().to_string().cyan());
            println!("  Rows dropped:     {}", snapshot.stats.rows_dropped());
            println!("  Numeric defaults: {}", snapshot.stats.numeric_defaults);
            for message in &snapshot.stats.errors {
                println!("  {} {}", "!".yellow(), message);
            }
        }
    }
    Ok(())
}

fn print_basic_stats(stats: &BasicStats, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats)?);
        }
        OutputFormat::Human => {
            println!("{}", "Catalog statistics".bold());
            println!("  Total:        {}", stats.total.to_string().cyan());
            println!("  In stock:     {}", stats.in_stock.to_string().green());
            println!("  Out of stock: {}", stats.out_of_stock.to_string().red());
            println!("  Categories:   {}", stats.categories.join(", "));
        }
    }
    Ok(())
}

fn print_dashboard_stats(stats: &DashboardStats, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stats)?);
        }
        OutputFormat::Human => {
            println!("{}", "Dashboard".bold());
            println!("  Items:       {}", stats.total_items.to_string().cyan());
            println!("  Total stock: {}", stats.total_stock_count);
            println!("  Total value: {:.2}", stats.total_value);
            println!("  Low stock:   {}", stats.low_stock.to_string().yellow());
            println!("  Out of stock: {}", stats.out_of_stock.to_string().red());
            println!("  Top categories:");
            for entry in &stats.top_categories {
                println!("    {} ({})", entry.name, entry.count);
            }
        }
    }
    Ok(())
}

fn print_history(sku: &str, history: &[PricePoint], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(history)?);
        }
        OutputFormat::Human => {
            if history.is_empty() {
                println!("No price history for {}", sku.bold());
            } else {
                println!("Price history for {}", sku.bold());
                for point in history {
                    println!("  {}  {}", point.date, point.price.cyan());
                }
            }
        }
    }
    Ok(())
}
