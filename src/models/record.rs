//! Bibliographic record model

use serde::{Deserialize, Serialize};

/// Semantic fields a tag populates directly.
///
/// `title` is deliberately absent: it is only ever produced by the title
/// resolution pass, never by generic extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticField {
    Author,
    Subject,
    Grnti,
    Bbk,
    Owners,
    AuthorSign,
    SystematicCode,
    PdfUrl,
}

/// Structured output of parsing one record block.
///
/// Serializes to a flat JSON object with absent fields omitted, the shape
/// downstream importers consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibliographicRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grnti: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_sign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systematic_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl BibliographicRecord {
    /// A record with no populated fields is not worth emitting.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.grnti.is_none()
            && self.bbk.is_none()
            && self.owners.is_none()
            && self.author_sign.is_none()
            && self.systematic_code.is_none()
            && self.pdf_url.is_none()
    }

    /// Append text to a field, `"; "`-joining repeated tag occurrences in
    /// first-seen order.
    pub fn append(&mut self, field: SemanticField, text: &str) {
        let slot = self.field_mut(field);
        match slot {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(text);
            }
            None => *slot = Some(text.to_string()),
        }
    }

    fn field_mut(&mut self, field: SemanticField) -> &mut Option<String> {
        match field {
            SemanticField::Author => &mut self.author,
            SemanticField::Subject => &mut self.subject,
            SemanticField::Grnti => &mut self.grnti,
            SemanticField::Bbk => &mut self.bbk,
            SemanticField::Owners => &mut self.owners,
            SemanticField::AuthorSign => &mut self.author_sign,
            SemanticField::SystematicCode => &mut self.systematic_code,
            SemanticField::PdfUrl => &mut self.pdf_url,
        }
    }

    /// Labelled text rendering for downstream full-text indexing.
    pub fn to_document(&self) -> String {
        let mut lines = vec![format!(
            "Книга: {}",
            self.title.as_deref().unwrap_or("Без названия")
        )];
        if let Some(author) = &self.author {
            lines.push(format!("Автор: {author}"));
        }
        if let Some(subject) = &self.subject {
            lines.push(format!("Рубрика: {subject}"));
        }
        if let Some(bbk) = &self.bbk {
            lines.push(format!("ББК: {bbk}"));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_joins_repeats() {
        let mut record = BibliographicRecord::default();
        record.append(SemanticField::Subject, "История");
        record.append(SemanticField::Subject, "Философия");
        assert_eq!(record.subject.as_deref(), Some("История; Философия"));
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let record = BibliographicRecord {
            title: Some("Космос".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Космос" }));
    }

    #[test]
    fn test_document_rendering() {
        let record = BibliographicRecord {
            title: Some("Космос".to_string()),
            author: Some("Гагарин Ю.А.".to_string()),
            bbk: Some("39.6".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.to_document(),
            "Книга: Космос\nАвтор: Гагарин Ю.А.\nББК: 39.6"
        );
    }

    #[test]
    fn test_untitled_document_placeholder() {
        let record = BibliographicRecord {
            subject: Some("История".to_string()),
            ..Default::default()
        };
        assert!(record.to_document().starts_with("Книга: Без названия"));
    }
}
