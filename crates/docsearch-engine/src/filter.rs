//! The filter pass: a conjunction of independent predicates applied as a
//! stable scan over the corpus.

use docsearch_core::types::{Document, Query};

/// Filtered view of `corpus` for `query`, preserving corpus order.
///
/// Pure: the corpus is never mutated and no state survives between calls.
/// A category or type value that matches no document yields an empty
/// result, not an error.
pub fn search(corpus: &[Document], query: &Query) -> Vec<Document> {
    corpus.iter().filter(|doc| matches(doc, query)).cloned().collect()
}

fn matches(doc: &Document, query: &Query) -> bool {
    matches_term(doc, &query.term)
        && query.category.admits(&doc.category)
        && query.doc_type.admits(&doc.doc_type)
}

/// Unanchored substring match over title, content, and tags. Lowercasing
/// both sides keeps the comparison case-insensitive; scripts without case
/// (the demo corpus is Thai) pass through `to_lowercase` unchanged.
fn matches_term(doc: &Document, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    doc.title.to_lowercase().contains(&needle)
        || doc.content.to_lowercase().contains(&needle)
        || doc.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_core::corpus::sample_documents;
    use docsearch_core::types::{DocumentType, Filter};

    fn ids(docs: &[Document]) -> Vec<u32> {
        docs.iter().map(|d| d.id).collect()
    }

    #[test]
    fn term_matches_are_case_insensitive() {
        let corpus = sample_documents();
        assert_eq!(ids(&search(&corpus, &Query::with_term("crm"))), vec![2]);
        assert_eq!(ids(&search(&corpus, &Query::with_term("q3"))), vec![5]);
    }

    #[test]
    fn term_matches_via_tags_alone() {
        let corpus = sample_documents();
        // "ผลงาน" appears only in doc 5's tags, not in any title or content
        assert_eq!(ids(&search(&corpus, &Query::with_term("ผลงาน"))), vec![5]);
    }

    #[test]
    fn category_match_is_exact() {
        let corpus = sample_documents();
        let query = Query {
            category: Filter::Only("รายงาน".to_string()),
            ..Query::default()
        };
        // A prefix of a category value is not that category
        assert!(search(&corpus, &query).is_empty());
    }

    #[test]
    fn type_filter_is_independent_of_term() {
        let corpus = sample_documents();
        let query = Query {
            term: "นโยบาย".to_string(),
            doc_type: Filter::Only(DocumentType::Pdf),
            ..Query::default()
        };
        assert_eq!(ids(&search(&corpus, &query)), vec![3]);
    }
}
