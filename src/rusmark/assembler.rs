//! Record assembly
//!
//! Groups a block's tagged lines, maps tags to semantic fields and runs
//! subfield extraction, then hands the groups to title resolution.

use indexmap::IndexMap;

use super::{subfields, title, tokenizer};
use crate::models::{BibliographicRecord, SemanticField};

/// Raw tag occurrences of one block, in first-seen order.
pub type TaggedGroups = IndexMap<String, Vec<String>>;

/// Fixed tag table. Tags absent here are either title-only material
/// (200, 210, 601, 461) or dropped.
fn semantic_field(tag: &str) -> Option<SemanticField> {
    match tag {
        "700" => Some(SemanticField::Author),
        "606" => Some(SemanticField::Subject),
        "964" => Some(SemanticField::Grnti),
        "621" => Some(SemanticField::Bbk),
        "902" => Some(SemanticField::Owners),
        "908" => Some(SemanticField::AuthorSign),
        "906" => Some(SemanticField::SystematicCode),
        "955" => Some(SemanticField::PdfUrl),
        _ => None,
    }
}

/// Collect a block's tagged lines into ordered per-tag groups.
pub fn group_tags(block: &str) -> TaggedGroups {
    let mut groups = TaggedGroups::new();
    for line in tokenizer::lines(block) {
        if let Some(tagged) = tokenizer::tagged(line) {
            groups
                .entry(tagged.tag.to_string())
                .or_default()
                .push(tagged.value.to_string());
        }
    }
    groups
}

/// Assemble one block into a record.
///
/// The result may be empty; the caller decides whether to emit it.
pub fn assemble(block: &str) -> BibliographicRecord {
    let groups = group_tags(block);
    let mut record = BibliographicRecord::default();

    for (tag, values) in &groups {
        let Some(field) = semantic_field(tag) else {
            continue;
        };
        for value in values {
            let text = subfields::extract(tag, value);
            if !text.is_empty() {
                record.append(field, &text);
            }
        }
    }

    if let Some(title) = title::resolve(&groups) {
        record.title = Some(title);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_tags_preserves_order_and_repeats() {
        let block = "#606: ^AИстория\n#700: ^AИванов\n#606: ^AФилософия\n";
        let groups = group_tags(block);
        let tags: Vec<&String> = groups.keys().collect();
        assert_eq!(tags, ["606", "700"]);
        assert_eq!(groups["606"], vec!["^AИстория", "^AФилософия"]);
    }

    #[test]
    fn test_assemble_accumulates_repeated_tags() {
        let block = "#606: ^AИстория\n#606: ^AФилософия\n";
        let record = assemble(block);
        assert_eq!(record.subject.as_deref(), Some("История; Философия"));
    }

    #[test]
    fn test_assemble_skips_empty_extractions() {
        // 955 without ^A extracts to nothing; the field must stay absent.
        let block = "#955: ^Bтолько-B\n#906: 02.01\n";
        let record = assemble(block);
        assert!(record.pdf_url.is_none());
        assert_eq!(record.systematic_code.as_deref(), Some("02.01"));
    }

    #[test]
    fn test_tag_200_not_emitted_generically() {
        // A 200 whose ^A is empty resolves no title and must not leak its
        // other subfields into the record.
        let block = "#200: ^EТолько примечание\n";
        let record = assemble(block);
        assert!(record.title.is_none());
        assert!(record.is_empty());
    }

    #[test]
    fn test_unmapped_tags_dropped() {
        let block = "#999: ^Aнечто\nслужебная строка\n";
        assert!(assemble(block).is_empty());
    }
}
