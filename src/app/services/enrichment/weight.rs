//! Package weight extraction from normalized product names
//!
//! Weights are advertised inline in product names ("Ração Golden 15kg",
//! "Sachê 85g", "Shampoo 500ml"). Unit patterns are tried in a fixed
//! priority order; the first pattern that matches anywhere in the string
//! decides, regardless of where competing units appear. Gram and milliliter
//! values are converted to kilograms; liter-family values are kept verbatim,
//! matching the upstream convention.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{WEIGHT_MAX_KG, WEIGHT_MIN_KG};

/// Unit patterns in priority order, each with its kilogram conversion factor
const UNIT_PATTERNS: &[(&str, f64)] = &[
    (r"(\d+(?:[,\.]\d+)?)\s*kg", 1.0),
    (r"(\d+(?:[,\.]\d+)?)\s*k\b", 1.0),
    (r"(\d+)\s*quilos?", 1.0),
    (r"(\d+(?:[,\.]\d+)?)\s*g\b", 0.001),
    (r"(\d+(?:[,\.]\d+)?)\s*gramas?", 0.001),
    (r"(\d+(?:[,\.]\d+)?)\s*ml", 0.001),
    (r"(\d+(?:[,\.]\d+)?)\s*litros?", 1.0),
    (r"(\d+(?:[,\.]\d+)?)\s*l\b", 1.0),
];

/// Patterns compiled once, in priority order
static COMPILED_PATTERNS: Lazy<Vec<(Regex, f64)>> = Lazy::new(|| {
    UNIT_PATTERNS
        .iter()
        .map(|(pattern, factor)| {
            let regex = Regex::new(&format!("(?i){pattern}"))
                .expect("static weight pattern must compile");
            (regex, *factor)
        })
        .collect()
});

/// Extract a package weight in kilograms from a normalized name
///
/// Returns the weight as a three-decimal string when a pattern yields a
/// value strictly within (0.001, 50] kg; out-of-bounds candidates fall
/// through to the next pattern.
pub fn extract(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    for (regex, factor) in COMPILED_PATTERNS.iter() {
        if let Some(captures) = regex.captures(name) {
            let literal = captures[1].replace(',', ".");
            let Ok(value) = literal.parse::<f64>() else {
                continue;
            };
            let kilograms = value * factor;
            if kilograms > WEIGHT_MIN_KG && kilograms <= WEIGHT_MAX_KG {
                return Some(format!("{kilograms:.3}"));
            }
        }
    }

    None
}
