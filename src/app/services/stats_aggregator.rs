//! Stock and valuation statistics over the finalized catalog
//!
//! Two views exist: basic stats for the listing screen and richer dashboard
//! stats. Dashboard monetary values use the dashboard numeric convention
//! (see [`enrichment::numeric`]); the two conventions are intentionally not
//! unified.

use serde::{Deserialize, Serialize};

use crate::app::models::Product;
use crate::app::services::enrichment::numeric;

/// Catalog counts for the listing screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Total records in the catalog
    pub total: usize,

    /// Records with stock above zero
    pub in_stock: usize,

    /// Records with stock at or below zero
    pub out_of_stock: usize,

    /// Sorted unique category names
    pub categories: Vec<String>,
}

/// Frequency of one category in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Inventory totals for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total records in the catalog
    pub total_items: usize,

    /// Sum of stock across all records
    pub total_stock_count: i64,

    /// Total inventory value, Σ(stock × price) under the dashboard
    /// numeric convention
    pub total_value: f64,

    /// Records with stock in 1..=3
    pub low_stock: usize,

    /// Records with stock at or below zero
    pub out_of_stock: usize,

    /// Five most frequent categories, ties in first-seen order
    pub top_categories: Vec<CategoryCount>,
}

/// Compute listing-screen statistics
pub fn basic_stats(products: &[Product]) -> BasicStats {
    let mut in_stock = 0;
    let mut out_of_stock = 0;
    let mut categories: Vec<String> = Vec::new();

    for product in products {
        let stock = numeric::parse_stock(&product.stock).unwrap_or(0);
        if stock > 0 {
            in_stock += 1;
        } else {
            out_of_stock += 1;
        }
        if !categories.contains(&product.categories) {
            categories.push(product.categories.clone());
        }
    }
    categories.sort();

    BasicStats {
        total: products.len(),
        in_stock,
        out_of_stock,
        categories,
    }
}

/// Compute dashboard statistics
pub fn dashboard_stats(products: &[Product]) -> DashboardStats {
    if products.is_empty() {
        return DashboardStats::default();
    }

    let mut total_stock_count = 0i64;
    let mut total_value = 0.0f64;
    let mut low_stock = 0;
    let mut out_of_stock = 0;
    let mut category_counts: Vec<CategoryCount> = Vec::new();

    for product in products {
        let stock = numeric::parse_stock(&product.stock).unwrap_or(0);
        let price = numeric::parse_dashboard_decimal(&product.regular_price).unwrap_or(0.0);

        total_stock_count += stock;
        total_value += stock as f64 * price;
        if stock > 0 && stock <= 3 {
            low_stock += 1;
        }
        if stock <= 0 {
            out_of_stock += 1;
        }

        match category_counts
            .iter_mut()
            .find(|entry| entry.name == product.categories)
        {
            Some(entry) => entry.count += 1,
            None => category_counts.push(CategoryCount {
                name: product.categories.clone(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    category_counts.sort_by(|a, b| b.count.cmp(&a.count));
    category_counts.truncate(5);

    DashboardStats {
        total_items: products.len(),
        total_stock_count,
        total_value,
        low_stock,
        out_of_stock,
        top_categories: category_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: &str, price: &str, category: &str) -> Product {
        let mut product = Product::empty();
        product.stock = stock.to_string();
        product.regular_price = price.to_string();
        product.categories = category.to_string();
        product
    }

    #[test]
    fn test_basic_stats_counts_and_categories() {
        let products = vec![
            product("5", "10.00", "Rações"),
            product("0", "10.00", "Aquarismo"),
            product("2", "10.00", "Rações"),
        ];
        let stats = basic_stats(&products);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.categories, vec!["Aquarismo", "Rações"]);
    }

    #[test]
    fn test_basic_stats_empty_catalog() {
        let stats = basic_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.in_stock, 0);
        assert_eq!(stats.out_of_stock, 0);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn test_dashboard_value_uses_dashboard_convention() {
        // "89.90" reads as 8990 under the dashboard convention
        let products = vec![product("2", "89.90", "Rações")];
        let stats = dashboard_stats(&products);

        assert_eq!(stats.total_stock_count, 2);
        assert!((stats.total_value - 17980.0).abs() < 1e-9);
    }

    #[test]
    fn test_dashboard_low_stock_band() {
        let products = vec![
            product("0", "1,00", "A"),
            product("1", "1,00", "A"),
            product("3", "1,00", "A"),
            product("4", "1,00", "A"),
        ];
        let stats = dashboard_stats(&products);

        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.out_of_stock, 1);
    }

    #[test]
    fn test_top_categories_tie_breaks_first_seen() {
        let products = vec![
            product("1", "1,00", "B"),
            product("1", "1,00", "A"),
            product("1", "1,00", "B"),
            product("1", "1,00", "A"),
            product("1", "1,00", "C"),
        ];
        let stats = dashboard_stats(&products);

        let names: Vec<&str> = stats
            .top_categories
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        // B and A tie at 2 and keep first-seen order; C trails
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_top_categories_capped_at_five() {
        let mut products = Vec::new();
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            products.push(product("1", "1,00", name));
        }
        let stats = dashboard_stats(&products);
        assert_eq!(stats.top_categories.len(), 5);
    }
}
