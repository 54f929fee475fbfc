//! Facet accessors backing the category/type dropdowns and the
//! interactive `/facets` command.

use docsearch_core::types::{Document, DocumentType, Query};

use crate::filter;

/// Unique category values in first-seen corpus order.
pub fn distinct_categories(corpus: &[Document]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for doc in corpus {
        if !out.iter().any(|c| c == &doc.category) {
            out.push(doc.category.clone());
        }
    }
    out
}

/// Unique document types in first-seen corpus order.
pub fn distinct_types(corpus: &[Document]) -> Vec<DocumentType> {
    let mut out = Vec::new();
    for doc in corpus {
        if !out.contains(&doc.doc_type) {
            out.push(doc.doc_type);
        }
    }
    out
}

/// Result count per category for the documents matching `query`,
/// categories in first-seen order of the matching set.
pub fn category_counts(corpus: &[Document], query: &Query) -> Vec<(String, usize)> {
    let hits = filter::search(corpus, query);
    let mut out: Vec<(String, usize)> = Vec::new();
    for doc in &hits {
        match out.iter_mut().find(|(category, _)| category == &doc.category) {
            Some((_, count)) => *count += 1,
            None => out.push((doc.category.clone(), 1)),
        }
    }
    out
}
