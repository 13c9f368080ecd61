//! Parsing statistics and result structures for catalog exports
//!
//! Row-level failures never abort a batch; they are counted here and
//! surfaced alongside the parsed catalog so callers can see how much of the
//! source survived.

use crate::app::models::Product;
use serde::{Deserialize, Serialize};

/// Which export shape the sniffer selected for a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportShape {
    /// One row per product with named columns, already enriched upstream
    Standard,
    /// Vendor export requiring positional recovery relative to the anchor
    Raw,
}

/// Parsing result with products and diagnostics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed catalog records
    pub products: Vec<Product>,

    /// Structured diagnostics for the run
    pub stats: ParseStats,
}

impl ParseResult {
    /// An empty result carrying a single diagnostic message
    pub fn empty_with_error(message: impl Into<String>) -> Self {
        let mut stats = ParseStats::new();
        stats.add_error(message);
        Self {
            products: Vec::new(),
            stats,
        }
    }
}

/// Structured diagnostics accumulated while parsing one export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows considered (header rows excluded)
    pub total_rows: usize,

    /// Rows that became catalog records
    pub products_parsed: usize,

    /// Rows dropped for not covering every positional offset
    pub rows_dropped_short: usize,

    /// Rows dropped for an empty SKU or description after trimming
    pub rows_dropped_missing_fields: usize,

    /// Numeric cells that fell back to the default value
    pub numeric_defaults: usize,

    /// Diagnostic messages for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            products_parsed: 0,
            rows_dropped_short: 0,
            rows_dropped_missing_fields: 0,
            numeric_defaults: 0,
            errors: Vec::new(),
        }
    }

    /// Record a diagnostic message
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Total rows dropped by filtering
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped_short + self.rows_dropped_missing_fields
    }

    /// Share of considered rows that became records, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.products_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
