//! Numeric coercion for export cell values
//!
//! The export renders decimals with a comma separator and leaves failed
//! lookups as arbitrary text, so every numeric field is parsed totally:
//! callers receive `None` on failure and substitute the documented default.
//!
//! Two distinct conventions exist and are intentionally kept apart: the
//! ingestion convention treats the comma as the decimal separator, while the
//! dashboard convention additionally strips dot thousand-separators
//! ("1.200,50" → 1200.50). Dashboard statistics rely on the latter; nothing
//! else does.

/// Parse a price or cost cell under the ingestion convention
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

/// Parse a stock cell under the ingestion convention, truncating to units
///
/// Negative stock readings are clamped to zero: a catalog record never
/// reports less than nothing on hand.
pub fn parse_stock(raw: &str) -> Option<i64> {
    parse_decimal(raw).map(|value| (value as i64).max(0))
}

/// Parse a price cell under the dashboard convention
///
/// Strips dot thousand-separators before converting the comma to a decimal
/// point. This disagrees with [`parse_decimal`] on canonical two-decimal
/// strings ("89.90" parses as 8990.0) and is preserved verbatim from the
/// upstream dashboard.
pub fn parse_dashboard_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .replace('.', "")
        .replace(',', ".")
        .parse::<f64>()
        .ok()
}
