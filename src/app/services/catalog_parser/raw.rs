//! Raw-shape export adapter
//!
//! Vendor exports bury the product table somewhere below preamble rows and
//! identify it only by an anchor cell. This adapter finds the anchor line,
//! derives the positional layout, recovers the category from embedded
//! department tags, filters unusable rows, and routes the survivors through
//! the enrichment pipeline.

use std::path::Path;
use tracing::{debug, info, warn};

use super::layout::RawLayout;
use super::stats::{ParseResult, ParseStats};
use crate::app::services::enrichment::{self, RawRow};
use crate::constants::{DEFAULT_CATEGORY, DEPARTMENT_TAG, RAW_ANCHOR_MARKER};
use crate::{Error, Result};

/// Parse a raw-shape export into enriched catalog records
///
/// A missing anchor yields an empty result with a diagnostic rather than an
/// error: the file simply is not a recognizable export.
pub fn parse_raw(path: &Path) -> Result<ParseResult> {
    info!("Parsing raw export: {}", path.display());

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let content = String::from_utf8_lossy(&bytes);

    let lines: Vec<&str> = content.lines().collect();
    let Some(anchor_line) = lines
        .iter()
        .position(|line| line.contains(RAW_ANCHOR_MARKER))
    else {
        warn!(
            "Anchor marker '{}' not found in {}",
            RAW_ANCHOR_MARKER,
            path.display()
        );
        return Ok(ParseResult::empty_with_error(format!(
            "Anchor marker '{RAW_ANCHOR_MARKER}' not found"
        )));
    };

    // The anchor line onward is quote-aware CSV; everything above is preamble
    let table = lines[anchor_line..].join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(table.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record),
            Err(error) => {
                return Err(Error::csv_parsing(
                    path.display().to_string(),
                    "Failed to parse raw export table",
                    Some(error),
                ));
            }
        }
    }

    let Some(header_row) = rows.first() else {
        return Ok(ParseResult::empty_with_error("Raw export has no rows"));
    };
    let Some(layout) = RawLayout::from_header_row(header_row) else {
        return Ok(ParseResult::empty_with_error(
            "Anchor column not present in parsed header row",
        ));
    };
    debug!("Raw layout anchored at column {}", layout.anchor_index);

    // The anchor row doubles as data in some uploads; skip it only when it
    // repeats the header labels at the SKU offset
    let first_data_row = if layout.is_repeated_header(header_row) {
        1
    } else {
        0
    };

    let mut stats = ParseStats::new();
    let mut products = Vec::new();

    for row in &rows[first_data_row..] {
        stats.total_rows += 1;

        if row.len() < layout.required_width() {
            stats.rows_dropped_short += 1;
            continue;
        }

        let sku = row.get(layout.sku_index()).unwrap_or("");
        let name = row.get(layout.description_index()).unwrap_or("");
        if sku.trim().is_empty() || name.trim().is_empty() {
            stats.rows_dropped_missing_fields += 1;
            continue;
        }

        let raw_row = RawRow {
            sku: sku.to_string(),
            name: name.to_string(),
            stock: row.get(layout.stock_index()).unwrap_or("").to_string(),
            price: row.get(layout.price_index()).unwrap_or("").to_string(),
            cost: row.get(layout.cost_index()).unwrap_or("").to_string(),
            category: extract_category(row),
        };

        products.push(enrichment::enrich_row(&raw_row, &mut stats));
        stats.products_parsed += 1;
    }

    info!(
        "Raw export parsed: {} of {} rows ({} short, {} missing fields)",
        stats.products_parsed,
        stats.total_rows,
        stats.rows_dropped_short,
        stats.rows_dropped_missing_fields
    );

    Ok(ParseResult { products, stats })
}

/// Recover the category from an embedded department tag
///
/// Any cell of the row may carry "Departamento: <category>"; the first cell
/// whose text before the colon trims to exactly the tag wins. Rows without
/// a tag fall back to the default category.
fn extract_category(row: &csv::StringRecord) -> String {
    for cell in row.iter() {
        if cell.contains(DEPARTMENT_TAG) {
            if let Some((before, after)) = cell.split_once(':') {
                if before.trim() == DEPARTMENT_TAG {
                    return after.trim().to_string();
                }
            }
        }
    }
    DEFAULT_CATEGORY.to_string()
}
