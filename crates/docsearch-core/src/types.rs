//! Domain types shared by the query engine and the terminal front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type DocId = u32;

/// A searchable document record.
///
/// - `id`: unique across the corpus, stable for its lifetime
/// - `title`/`content`: human-readable text, matched case-insensitively
/// - `doc_type`: file format of the underlying document
/// - `size`/`date`: display strings, never parsed or compared
/// - `tags`: membership matters to matching, order is display order
/// - `author`/`category`: free-text attributes; categories form a small set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub size: String,
    pub date: String,
    pub tags: Vec<String>,
    pub author: String,
    pub category: String,
}

/// File format of a document. The set is closed; display lookups match on
/// it exhaustively so widening it is caught at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Pdf,
    Docx,
    Xlsx,
    Pptx,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Docx => "DOCX",
            DocumentType::Xlsx => "XLSX",
            DocumentType::Pptx => "PPTX",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_uppercase().as_str() {
            "PDF" => Ok(DocumentType::Pdf),
            "DOCX" => Ok(DocumentType::Docx),
            "XLSX" => Ok(DocumentType::Xlsx),
            "PPTX" => Ok(DocumentType::Pptx),
            other => Err(Error::InvalidQuery(format!("unknown document type: {other}"))),
        }
    }
}

/// One dimension of a query: unconstrained, or pinned to a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// True when `value` passes this dimension.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(want) => want == value,
        }
    }
}

/// One search request: free text plus two facet constraints. Built fresh
/// per input change and passed by value; the engine keeps no state between
/// calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub category: Filter<String>,
    pub doc_type: Filter<DocumentType>,
}

impl Query {
    /// Free-text-only query; both facet dimensions stay unconstrained.
    pub fn with_term(term: impl Into<String>) -> Self {
        Self { term: term.into(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_parses_case_insensitively() {
        assert_eq!("pdf".parse::<DocumentType>().expect("pdf"), DocumentType::Pdf);
        assert_eq!("PPTX".parse::<DocumentType>().expect("pptx"), DocumentType::Pptx);
        assert_eq!("xLsX".parse::<DocumentType>().expect("xlsx"), DocumentType::Xlsx);
    }

    #[test]
    fn document_type_rejects_unknown_token() {
        let err = "csv".parse::<DocumentType>().expect_err("csv is not a document type");
        assert!(matches!(err, Error::InvalidQuery(_)));
    }

    #[test]
    fn document_type_serializes_uppercase() {
        let json = serde_json::to_string(&DocumentType::Docx).expect("serialize");
        assert_eq!(json, "\"DOCX\"");
        let back: DocumentType = serde_json::from_str("\"PDF\"").expect("deserialize");
        assert_eq!(back, DocumentType::Pdf);
    }

    #[test]
    fn filter_all_admits_everything() {
        let all: Filter<String> = Filter::All;
        assert!(all.admits(&"anything".to_string()));
    }

    #[test]
    fn filter_only_is_exact_and_case_sensitive() {
        let only = Filter::Only("รายงานการเงิน".to_string());
        assert!(only.admits(&"รายงานการเงิน".to_string()));
        assert!(!only.admits(&"นโยบาย".to_string()));
        let latin = Filter::Only("Reports".to_string());
        assert!(!latin.admits(&"reports".to_string()));
    }

    #[test]
    fn default_query_is_unconstrained() {
        let query = Query::default();
        assert!(query.term.is_empty());
        assert_eq!(query.category, Filter::All);
        assert_eq!(query.doc_type, Filter::All);
    }
}
