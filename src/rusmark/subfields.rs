//! Per-tag subfield extraction
//!
//! A tag's raw value carries zero or more `^X`-marked subfields. Extraction
//! is deterministic and never fails; the worst case is an empty string.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Uppercase marker with a non-empty payload. Used where an empty subfield
/// is as good as an absent one (author, publication).
static SUBFIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^([A-Z])([^^]+)").unwrap());

/// Uppercase marker, empty payload allowed.
static SUBFIELD_SPARSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^([A-Z])([^^]*)").unwrap());

/// Any-case marker, empty payload allowed.
static SUBFIELD_ANY_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^([A-Za-z])([^^]*)").unwrap());

/// First `^A` sub-value, for tags where only that subfield matters.
static FIRST_A: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^A([^^]+)").unwrap());

/// Any marker, used by the generic cleaning split.
static ANY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^.").unwrap());

/// Extract the normalized text of one tag occurrence.
pub fn extract(tag: &str, value: &str) -> String {
    match tag {
        "700" => author(value),
        // Holder (902) and link (955) carry their payload in ^A only.
        "902" | "955" => first_subfield_a(value),
        _ => generic(value),
    }
}

/// Default cleaning rule: strip all markers, collapse the fragments.
fn generic(value: &str) -> String {
    ANY_MARKER
        .split(value)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `^AИванов^BИ.И.^GИван Иванович^CПрофессор` becomes
/// `Иванов И.И. (Иван Иванович), Профессор`.
fn author(value: &str) -> String {
    let subfields = subfield_map(value);
    let part = |code: char| {
        subfields
            .get(&code)
            .map(|s| s.trim())
            .unwrap_or("")
    };

    let mut result = part('A').to_string();
    if !part('B').is_empty() {
        result.push(' ');
        result.push_str(part('B'));
    }
    if !part('G').is_empty() {
        result.push_str(" (");
        result.push_str(part('G'));
        result.push(')');
    }
    if !part('C').is_empty() {
        result.push_str(", ");
        result.push_str(part('C'));
    }
    result.trim_matches([',', ' ']).to_string()
}

/// First `^A` occurrence, trimmed. Absence yields an empty string.
pub fn first_subfield_a(value: &str) -> String {
    FIRST_A
        .captures(value)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

fn keyed(value: &str, pattern: &Regex) -> HashMap<char, String> {
    let mut map = HashMap::new();
    for caps in pattern.captures_iter(value) {
        let Some(code) = caps[1].chars().next() else {
            continue;
        };
        // A repeated marker keeps its last occurrence.
        map.insert(code, caps[2].to_string());
    }
    map
}

/// Keyed subfield map, uppercase markers with non-empty payloads.
pub fn subfield_map(value: &str) -> HashMap<char, String> {
    keyed(value, &SUBFIELD)
}

/// Keyed subfield map, uppercase markers, empty payloads kept.
pub fn subfield_map_sparse(value: &str) -> HashMap<char, String> {
    keyed(value, &SUBFIELD_SPARSE)
}

/// Keyed subfield map, markers of either case, empty payloads kept.
pub fn subfield_map_any_case(value: &str) -> HashMap<char, String> {
    keyed(value, &SUBFIELD_ANY_CASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_strips_markers() {
        assert_eq!(extract("606", "^AИстория^XРоссия"), "История Россия");
        assert_eq!(extract("621", "  63.3(2)  "), "63.3(2)");
        assert_eq!(extract("964", "^A"), "");
    }

    #[test]
    fn test_generic_no_markers_passthrough() {
        assert_eq!(extract("908", " И-20 "), "И-20");
    }

    #[test]
    fn test_author_full_composition() {
        assert_eq!(
            extract("700", "^AИванов^BИ.И.^GИван Иванович^CПрофессор"),
            "Иванов И.И. (Иван Иванович), Профессор"
        );
    }

    #[test]
    fn test_author_partial_subfields() {
        assert_eq!(extract("700", "^AГагарин^BЮ.А."), "Гагарин Ю.А.");
        assert_eq!(extract("700", "^AГагарин"), "Гагарин");
        assert_eq!(extract("700", "^BЮ.А."), "Ю.А.");
        assert_eq!(extract("700", ""), "");
    }

    #[test]
    fn test_author_subfield_order_irrelevant() {
        assert_eq!(extract("700", "^BИ.И.^AИванов"), "Иванов И.И.");
    }

    #[test]
    fn test_link_and_holder_take_first_a() {
        assert_eq!(
            extract("955", "^Ahttp://lib.example/a.pdf^Bignored"),
            "http://lib.example/a.pdf"
        );
        assert_eq!(extract("902", "^A ГПНТБ ^AДругой"), "ГПНТБ");
        assert_eq!(extract("955", "^Bno-a-here"), "");
    }

    #[test]
    fn test_duplicate_marker_last_wins_in_keyed_map() {
        let map = subfield_map("^AПервый^AВторой");
        assert_eq!(map.get(&'A').map(String::as_str), Some("Второй"));
    }
}
