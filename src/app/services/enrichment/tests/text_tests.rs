//! Tests for the ordered text normalization rules

use crate::app::services::enrichment::text_rules::normalize;

#[test]
fn test_repairs_stripped_accents() {
    assert_eq!(normalize("Racao P Ces Ad"), "Ração P Cães Adulto");
    assert_eq!(normalize("Aquario Eletrico"), "Aquário Elétrico");
}

#[test]
fn test_rules_match_case_insensitively() {
    assert_eq!(normalize("racao golden"), "Ração golden");
    assert_eq!(normalize("RACAO golden"), "Ração golden");
}

#[test]
fn test_known_words_take_table_casing() {
    // Replacements carry the canonical casing even for lowercase input
    assert_eq!(normalize("bolacha doce"), "Bolacha Doce");
}

#[test]
fn test_first_character_only_is_capitalized() {
    // "extra" has no rule and must stay lowercase: this is not title-casing
    assert_eq!(normalize("ração premium extra"), "Ração Premium extra");
}

#[test]
fn test_abbreviation_rule_preserves_trailing_context() {
    assert_eq!(normalize("Lampada Cb."), "Lâmpada Cabo");
    assert_eq!(normalize("Lampada Cb. 2m"), "Lâmpada Cabo 2m");
}

#[test]
fn test_word_boundaries_do_not_split_compounds() {
    // "10kg" has no boundary before "kg", so the unit rule leaves it alone
    assert_eq!(normalize("Racao 10kg"), "Ração 10kg");
}

#[test]
fn test_empty_string_stays_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_abbreviation_expansion() {
    assert_eq!(normalize("Frg com Arr"), "Frango com Arroz");
    assert_eq!(normalize("Sache Sabor Salm"), "Sachê Sabor Salmão");
}
