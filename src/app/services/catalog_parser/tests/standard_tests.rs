//! Tests for the standard-shape adapter

use super::{standard_export, temp_export};
use crate::app::services::catalog_parser::standard::parse_standard;

#[test]
fn test_named_columns_map_onto_the_record() {
    let file = temp_export(standard_export());
    let result = parse_standard(file.path(), b',').unwrap();

    assert_eq!(result.products.len(), 2);
    assert_eq!(result.stats.products_parsed, 2);

    let first = &result.products[0];
    assert_eq!(first.sku, "A1");
    assert_eq!(first.name, "Produto Pronto");
    assert_eq!(first.regular_price, "10.00");
    assert_eq!(first.categories, "Rações");
    assert_eq!(first.stock, "4");
}

#[test]
fn test_absent_canonical_columns_become_empty() {
    let file = temp_export("SKU,Name\nA1,Produto\n");
    let result = parse_standard(file.path(), b',').unwrap();

    let product = &result.products[0];
    assert_eq!(product.brand, "");
    assert_eq!(product.weight_kg, "");
    assert_eq!(product.description, "");
    assert_eq!(product.cost, "");
}

#[test]
fn test_extra_columns_are_ignored() {
    let file = temp_export("SKU,Name,Coluna Nova\nA1,Produto,whatever\n");
    let result = parse_standard(file.path(), b',').unwrap();

    assert_eq!(result.products.len(), 1);
    assert_eq!(result.products[0].sku, "A1");
}

#[test]
fn test_rows_are_not_enriched() {
    // Standard exports are assumed already enriched upstream; cells pass
    // through untouched, garbled or not
    let file = temp_export("SKU,Name\nA1,Racao Ces\n");
    let result = parse_standard(file.path(), b',').unwrap();

    assert_eq!(result.products[0].name, "Racao Ces");
}

#[test]
fn test_short_rows_fill_missing_cells_with_empty() {
    let file = temp_export("SKU,Name,Stock\nA1,Produto\n");
    let result = parse_standard(file.path(), b',').unwrap();

    assert_eq!(result.products[0].stock, "");
}

#[test]
fn test_semicolon_delimited_export() {
    let file = temp_export("SKU;Name;Stock\nA1;Produto;3\n");
    let result = parse_standard(file.path(), b';').unwrap();

    assert_eq!(result.products[0].stock, "3");
}
