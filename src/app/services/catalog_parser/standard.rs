//! Standard-shape export adapter
//!
//! Standard exports are already one row per product with named columns, so
//! this adapter performs no enrichment: it maps header names onto the
//! canonical record fields, fills any canonical field absent from the source
//! with the empty string, and leaves every cell as text.

use std::path::Path;
use tracing::{debug, info};

use super::stats::{ParseResult, ParseStats};
use crate::app::models::Product;
use crate::{Error, Result};

/// Parse a standard-shape export into unenriched catalog records
pub fn parse_standard(path: &Path, delimiter: u8) -> Result<ParseResult> {
    info!("Parsing standard export: {}", path.display());

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "Failed to read headers", Some(e))
        })?
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();
    debug!("Standard export headers: {:?}", headers);

    let mut stats = ParseStats::new();
    let mut products = Vec::new();

    for result in reader.records() {
        stats.total_rows += 1;

        match result {
            Ok(record) => {
                let mut product = Product::empty();
                for (index, header) in headers.iter().enumerate() {
                    product.set_field(header, record.get(index).unwrap_or(""));
                }
                products.push(product);
                stats.products_parsed += 1;
            }
            Err(error) => {
                stats.add_error(format!(
                    "CSV parse error at record {}: {}",
                    stats.total_rows, error
                ));
            }
        }
    }

    info!(
        "Standard export parsed: {} of {} rows",
        stats.products_parsed, stats.total_rows
    );

    Ok(ParseResult { products, stats })
}
