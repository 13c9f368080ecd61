//! Tests for the assembled per-row enrichment pipeline

use super::sample_row;
use crate::app::services::catalog_parser::ParseStats;
use crate::app::services::enrichment::{RawRow, enrich_row};

#[test]
fn test_row_is_fully_enriched() {
    let mut stats = ParseStats::new();
    let product = enrich_row(&sample_row(), &mut stats);

    assert_eq!(product.sku, "SKU001");
    assert_eq!(product.name, "Ração Golden 10kg");
    assert_eq!(product.regular_price, "89.90");
    assert_eq!(product.cost, "45.50");
    assert_eq!(product.stock, "5");
    assert_eq!(product.categories, "Rações");
    assert_eq!(product.brand, "Golden");
    assert_eq!(product.weight_kg, "10.000");
    assert!(product.short_description.contains("Marca: Golden"));
    assert!(product.description.contains("<h2>Ração Golden 10kg</h2>"));
    assert!(!product.has_image);
    assert_eq!(stats.numeric_defaults, 0);
}

#[test]
fn test_numeric_failures_default_and_are_counted() {
    let row = RawRow {
        sku: "SKU002".to_string(),
        name: "Produto Qualquer".to_string(),
        stock: "".to_string(),
        price: "abc".to_string(),
        cost: "12,00".to_string(),
        category: "Geral".to_string(),
    };
    let mut stats = ParseStats::new();
    let product = enrich_row(&row, &mut stats);

    assert_eq!(product.regular_price, "0.00");
    assert_eq!(product.stock, "0");
    assert_eq!(product.cost, "12.00");
    assert_eq!(stats.numeric_defaults, 2);
}

#[test]
fn test_unknown_brand_and_weight_stay_empty() {
    let row = RawRow {
        sku: "SKU003".to_string(),
        name: "Comedouro Simples".to_string(),
        stock: "1".to_string(),
        price: "5,00".to_string(),
        cost: "2,00".to_string(),
        category: "Geral".to_string(),
    };
    let mut stats = ParseStats::new();
    let product = enrich_row(&row, &mut stats);

    assert_eq!(product.brand, "");
    assert_eq!(product.weight_kg, "");
    // Brandless short description skips the brand segment entirely
    assert!(!product.short_description.contains("Marca:"));
}
