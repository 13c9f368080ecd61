//! Per-row enrichment pipeline for raw export rows
//!
//! Raw exports carry only positional cells: a code, a garbled name, stock,
//! price, and cost. This module turns one such row into a complete catalog
//! record by running the enrichment stages in order:
//!
//! 1. [`text_rules`] - repair the name and category text
//! 2. [`brands`] - detect the brand from the repaired name
//! 3. [`weight`] - extract the package weight from the repaired name
//! 4. [`numeric`] - coerce stock, price, and cost with safe defaults
//! 5. [`description`] - generate the storefront copy
//!
//! Stages never fail a row: numeric coercion degrades to documented defaults
//! and records the fact in the parse diagnostics.

pub mod brands;
pub mod description;
pub mod numeric;
pub mod text_rules;
pub mod weight;

#[cfg(test)]
pub mod tests;

use crate::app::models::Product;
use crate::app::services::catalog_parser::ParseStats;

/// One raw export row after positional recovery, before enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub sku: String,
    pub name: String,
    pub stock: String,
    pub price: String,
    pub cost: String,
    pub category: String,
}

/// Build a complete catalog record from a raw row
///
/// Numeric cells that fail to parse fall back to 0 / 0.00 and increment the
/// `numeric_defaults` diagnostic counter; the row itself is never rejected
/// here.
pub fn enrich_row(row: &RawRow, stats: &mut ParseStats) -> Product {
    let sku = row.sku.trim().to_string();
    let name = text_rules::normalize(row.name.trim());
    let category = text_rules::normalize(&row.category);

    let brand = brands::detect(&name);
    let weight_kg = weight::extract(&name);

    let price = numeric::parse_decimal(&row.price).unwrap_or_else(|| {
        stats.numeric_defaults += 1;
        0.0
    });
    let cost = numeric::parse_decimal(&row.cost).unwrap_or_else(|| {
        stats.numeric_defaults += 1;
        0.0
    });
    let stock = numeric::parse_stock(&row.stock).unwrap_or_else(|| {
        stats.numeric_defaults += 1;
        0
    });

    let short_description = description::short_description(&name, &category, brand);
    let full_description =
        description::full_description(&name, &category, brand, weight_kg.as_deref());

    Product {
        sku,
        name,
        regular_price: format!("{price:.2}"),
        categories: category,
        brand: brand.unwrap_or_default().to_string(),
        stock: stock.to_string(),
        description: full_description,
        short_description,
        weight_kg: weight_kg.unwrap_or_default(),
        cost: format!("{cost:.2}"),
        has_image: false,
    }
}
