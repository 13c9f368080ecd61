//! Tests for brand detection

use crate::app::services::enrichment::brands::detect;

#[test]
fn test_declaration_order_decides_overlapping_keys() {
    // "golden" is declared before "golden formula"; the first whole-word hit
    // wins deterministically
    assert_eq!(detect("Golden Formula 15kg"), Some("Golden"));
}

#[test]
fn test_whole_word_match_is_case_insensitive() {
    assert_eq!(detect("RAÇÃO WHISKAS 1KG"), Some("Whiskas"));
    assert_eq!(detect("Antipulgas NexGard 3 Comprimidos"), Some("NexGard"));
}

#[test]
fn test_multi_word_keys_match() {
    assert_eq!(detect("Petisco Taste of the Wild 80g"), Some("Taste of the Wild"));
}

#[test]
fn test_relaxed_pass_catches_glued_fragments() {
    // No word boundary around "premier", so only the substring pass hits
    assert_eq!(detect("Kit Superpremierx"), Some("Premier"));
}

#[test]
fn test_short_keys_never_match_as_substrings() {
    // "mor" is three characters and sits inside "mordedor"; the relaxed pass
    // must not fire
    assert_eq!(detect("Mordedor Resistente"), None);
}

#[test]
fn test_unknown_name_has_no_brand() {
    assert_eq!(detect("Produto Sem Marca Conhecida"), None);
}

#[test]
fn test_empty_name_has_no_brand() {
    assert_eq!(detect(""), None);
}
