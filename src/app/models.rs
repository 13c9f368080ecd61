//! Data models for the product catalog
//!
//! This module contains the normalized catalog record produced by the
//! processing pipeline and the price-history entry mined from backup
//! snapshots. Serde renames pin the exact output keys consumed downstream.

use serde::{Deserialize, Serialize};

/// A normalized catalog record
///
/// Every field is an explicit string in its canonical rendering: prices and
/// costs carry exactly two decimals, stock is a non-negative integer, weight
/// is either empty or a three-decimal kilogram value strictly within
/// (0.001, 50]. Records that survive raw-row filtering always have a
/// non-empty SKU and name. A record is built fresh on every processing run
/// and never mutated after finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product code, primary identifier of the record
    #[serde(rename = "SKU")]
    pub sku: String,

    /// Normalized product name
    #[serde(rename = "Name")]
    pub name: String,

    /// Sale price, two-decimal canonical string
    #[serde(rename = "Regular price")]
    pub regular_price: String,

    /// Normalized category, "Geral" when the source row carried none
    #[serde(rename = "Categories")]
    pub categories: String,

    /// Detected brand display name, empty when unknown
    #[serde(rename = "Meta: _marca")]
    pub brand: String,

    /// Units in stock, non-negative integer string
    #[serde(rename = "Stock")]
    pub stock: String,

    /// Generated storefront description markup
    #[serde(rename = "Description")]
    pub description: String,

    /// Generated one-line description
    #[serde(rename = "Short description")]
    pub short_description: String,

    /// Package weight in kilograms, three-decimal string or empty
    #[serde(rename = "Weight (kg)")]
    pub weight_kg: String,

    /// Acquisition cost, two-decimal canonical string
    #[serde(rename = "Meta: _custo")]
    pub cost: String,

    /// Whether an image keyed "{SKU}.jpg" exists, set at finalization
    #[serde(rename = "has_image", default)]
    pub has_image: bool,
}

impl Product {
    /// Create an empty record; used by the standard adapter to guarantee
    /// every canonical field exists even when absent from the source
    pub fn empty() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            regular_price: String::new(),
            categories: String::new(),
            brand: String::new(),
            stock: String::new(),
            description: String::new(),
            short_description: String::new(),
            weight_kg: String::new(),
            cost: String::new(),
            has_image: false,
        }
    }

    /// Assign a canonical field by its output key; unknown keys are ignored
    pub fn set_field(&mut self, key: &str, value: &str) {
        match key {
            "SKU" => self.sku = value.to_string(),
            "Name" => self.name = value.to_string(),
            "Regular price" => self.regular_price = value.to_string(),
            "Categories" => self.categories = value.to_string(),
            "Meta: _marca" => self.brand = value.to_string(),
            "Stock" => self.stock = value.to_string(),
            "Description" => self.description = value.to_string(),
            "Short description" => self.short_description = value.to_string(),
            "Weight (kg)" => self.weight_kg = value.to_string(),
            "Meta: _custo" => self.cost = value.to_string(),
            _ => {}
        }
    }
}

/// A historical price observation mined from one backup snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Snapshot date rendered as DD/MM/YYYY
    pub date: String,

    /// Price exactly as found in the snapshot (comma-decimal)
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_contract_keys() {
        let mut product = Product::empty();
        product.sku = "SKU001".to_string();
        product.name = "Ração Golden 10kg".to_string();
        product.regular_price = "89.90".to_string();

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["SKU"], "SKU001");
        assert_eq!(json["Name"], "Ração Golden 10kg");
        assert_eq!(json["Regular price"], "89.90");
        assert_eq!(json["Meta: _marca"], "");
        assert_eq!(json["Weight (kg)"], "");
        assert_eq!(json["has_image"], false);
    }

    #[test]
    fn test_set_field_maps_contract_keys() {
        let mut product = Product::empty();
        product.set_field("SKU", "A1");
        product.set_field("Meta: _custo", "12.50");
        product.set_field("Unknown column", "ignored");

        assert_eq!(product.sku, "A1");
        assert_eq!(product.cost, "12.50");
    }

    #[test]
    fn test_product_roundtrip() {
        let mut product = Product::empty();
        product.sku = "X9".to_string();
        product.has_image = true;

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }
}
