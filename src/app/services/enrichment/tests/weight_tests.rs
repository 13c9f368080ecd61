//! Tests for package weight extraction

use crate::app::services::enrichment::weight::extract;

#[test]
fn test_pattern_priority_beats_match_position() {
    // The kilogram pattern outranks the gram pattern even though "500g"
    // appears later in the string
    assert_eq!(extract("Ração 15kg 500g"), Some("15.000".to_string()));
}

#[test]
fn test_grams_convert_to_kilograms() {
    assert_eq!(extract("Petisco 500g"), Some("0.500".to_string()));
    assert_eq!(extract("Bifinho 65 gramas"), Some("0.065".to_string()));
}

#[test]
fn test_milliliters_convert_to_kilograms() {
    assert_eq!(extract("Shampoo 750ml"), Some("0.750".to_string()));
}

#[test]
fn test_liter_family_values_are_kept_verbatim() {
    assert_eq!(extract("Balde 20 Litros"), Some("20.000".to_string()));
    assert_eq!(extract("Garrafa 2l"), Some("2.000".to_string()));
}

#[test]
fn test_comma_decimal_literals() {
    assert_eq!(extract("Ração 10,5kg"), Some("10.500".to_string()));
}

#[test]
fn test_bare_k_abbreviation() {
    assert_eq!(extract("Saco 15k"), Some("15.000".to_string()));
}

#[test]
fn test_below_lower_bound_is_rejected() {
    // 0.5g converts to 0.0005 kg, outside (0.001, 50]
    assert_eq!(extract("Brinco 0,5g"), None);
}

#[test]
fn test_above_upper_bound_is_rejected() {
    assert_eq!(extract("Saco Areia 60kg"), None);
}

#[test]
fn test_no_unit_yields_no_weight() {
    assert_eq!(extract("Coleira Grande"), None);
    assert_eq!(extract(""), None);
}
