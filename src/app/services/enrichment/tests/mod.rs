//! Tests for the enrichment pipeline stages

use super::RawRow;

mod brand_tests;
mod enrich_tests;
mod text_tests;
mod weight_tests;

/// A plausible raw row for pipeline-level tests
pub fn sample_row() -> RawRow {
    RawRow {
        sku: " SKU001 ".to_string(),
        name: " Racao Golden 10kg ".to_string(),
        stock: "5".to_string(),
        price: "89,90".to_string(),
        cost: "45,50".to_string(),
        category: "Rações".to_string(),
    }
}
