//! Brand detection over normalized product names
//!
//! Brands are recognized from a fixed dictionary of name fragments mapped to
//! canonical display names. Matching runs in two phases over the lowercased
//! name: a whole-word pass first, then a relaxed substring pass for fragments
//! longer than three characters (short keys would false-positive inside
//! ordinary words). Both phases iterate the dictionary in declaration order,
//! which is the documented, reproducible match order: several keys are
//! substrings of one another ("golden" / "golden formula"), and the first
//! declared hit wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Known brand fragments and their canonical display names, in match order
#[rustfmt::skip]
const KNOWN_BRANDS: &[(&str, &str)] = &[
    ("royal canin", "Royal Canin"), ("royalcanin", "Royal Canin"), ("premier", "Premier"),
    ("premier pet", "Premier Pet"), ("golden", "Golden"), ("golden formula", "Golden Formula"),
    ("farmina", "Farmina"), ("farmina n&d", "Farmina N&D"), ("origen", "Origen"),
    ("acana", "Acana"), ("taste of the wild", "Taste of the Wild"), ("hills", "Hill's"),
    ("purina", "Purina"), ("proplan", "Pro Plan"), ("pro plan", "Pro Plan"),
    ("pedigree", "Pedigree"), ("whiskas", "Whiskas"), ("friskies", "Friskies"),
    ("dog chow", "Dog Chow"), ("cat chow", "Cat Chow"), ("special dog", "Special Dog"),
    ("special cat", "Special Cat"), ("luck dog", "Luck Dog"), ("luck cat", "Luck Cat"),
    ("max", "Max"), ("max cat", "Max Cat"), ("max dog", "Max Dog"),
    ("total", "Total"), ("total dog", "Total Dog"), ("total cat", "Total Cat"),
    ("sabor", "Sabor & Vida"), ("sabor e vida", "Sabor & Vida"), ("sabor vida", "Sabor & Vida"),
    ("guabi", "Guabi"), ("guabi natural", "Guabi Natural"), ("equilibrio", "Equilíbrio"),
    ("naturalis", "Naturalis"), ("nexgard", "NexGard"), ("bravecto", "Bravecto"),
    ("simparic", "Simparic"), ("revolution", "Revolution"), ("advocate", "Advocate"),
    ("frontline", "Frontline"), ("seresto", "Seresto"), ("heartgard", "Heartgard"),
    ("drontal", "Drontal"), ("vermifugo", "Vermífugo"), ("antipulgas", "Antipulgas"),
    ("zoetis", "Zoetis"), ("virbac", "Virbac"), ("agener", "Agener"),
    ("ceva", "Ceva"), ("merial", "Merial"), ("petbrilho", "Pet Brilho"),
    ("pet society", "Pet Society"), ("plush", "Plush"), ("nasus", "Nasus"),
    ("kelldrin", "Kelldrin"), ("vitor", "Vitor"), ("vitalab", "Vitalab"),
    ("biovet", "Biovet"), ("vetnil", "Vetnil"), ("ecopet", "Ecopet"),
    ("alcon", "Alcon"), ("tetra", "Tetra"), ("sera", "Sera"),
    ("tropical", "Tropical"), ("nutrafin", "Nutrafin"), ("ocean tech", "Ocean Tech"),
    ("oceantech", "Ocean Tech"), ("boyu", "Boyu"), ("sarlo", "Sarlo"),
    ("sarlo better", "Sarlo Better"), ("atman", "Atman"), ("aquatech", "Aquatech"),
    ("resun", "Resun"), ("megazoo", "Megazoo"), ("alimento", "Alimento"),
    ("nutrópica", "Nutrópica"), ("nutropica", "Nutrópica"), ("zootekna", "Zootekna"),
    ("poytara", "Poytara"), ("trinca ferro", "Trinca Ferro"), ("genco", "Genco"),
    ("hidroazul", "Hidroazul"), ("bel gard", "Bel Gard"), ("belguard", "Bel Gard"),
    ("barranets", "Barranets"), ("HTH", "HTH"), ("acquazero", "Acquazero"),
    ("tramontina", "Tramontina"), ("vonder", "Vonder"), ("western", "Western"),
    ("nautika", "Nautika"), ("coleman", "Coleman"), ("guepardo", "Guepardo"),
    ("mor", "Mor"), ("invictus", "Invictus"), ("marine sports", "Marine Sports"),
    ("maruri", "Maruri"), ("daiwa", "Daiwa"), ("shimano", "Shimano"),
    ("albatroz", "Albatroz"), ("saint", "Saint"), ("sumax", "Sumax"),
    ("forth", "Forth"), ("dimy", "Dimy"), ("nutriplan", "Nutriplan"),
    ("biofertil", "Biofertil"), ("bionatural", "BioNatural"), ("vitaplan", "Vitaplan"),
    ("plantafol", "Plantafol"), ("palheiro", "Palheiro"), ("smoking", "Smoking"),
    ("zig zag", "Zig Zag"), ("zigzag", "Zig Zag"), ("raw", "RAW"),
    ("club modiano", "Club Modiano"), ("copag", "Copag"),
];

/// Whole-word matchers compiled once, in declaration order
static WORD_MATCHERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    KNOWN_BRANDS
        .iter()
        .map(|(key, display)| {
            let regex = Regex::new(&format!(r"\b{}\b", regex::escape(key)))
                .expect("static brand pattern must compile");
            (regex, *display)
        })
        .collect()
});

/// Detect the brand of a normalized product name
pub fn detect(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }
    let name_lower = name.to_lowercase();

    // Phase 1: whole-word match
    for (regex, display) in WORD_MATCHERS.iter() {
        if regex.is_match(&name_lower) {
            return Some(*display);
        }
    }

    // Phase 2: relaxed containment for fragments glued to punctuation or
    // neighboring words; short keys are excluded to avoid false positives
    // ("pet" inside "tapete")
    for (key, display) in KNOWN_BRANDS {
        if key.chars().count() > 3 && name_lower.contains(key) {
            return Some(*display);
        }
    }

    None
}
