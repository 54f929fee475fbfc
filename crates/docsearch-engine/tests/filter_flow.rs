use docsearch_core::corpus::sample_documents;
use docsearch_core::types::{Document, DocumentType, Filter, Query};
use docsearch_engine::filter;

fn ids(docs: &[Document]) -> Vec<u32> {
    docs.iter().map(|d| d.id).collect()
}

#[test]
fn unconstrained_query_returns_corpus_unchanged() {
    let corpus = sample_documents();
    let result = filter::search(&corpus, &Query::default());
    assert_eq!(result, corpus);
}

#[test]
fn empty_corpus_yields_empty_result() {
    let queries = [
        Query::default(),
        Query::with_term("อะไรก็ได้"),
        Query { doc_type: Filter::Only(DocumentType::Pdf), ..Query::default() },
    ];
    for query in &queries {
        assert!(filter::search(&[], query).is_empty());
    }
}

#[test]
fn search_is_idempotent() {
    let corpus = sample_documents();
    let query = Query::with_term("รายงาน");
    assert_eq!(filter::search(&corpus, &query), filter::search(&corpus, &query));
}

#[test]
fn result_is_a_subsequence_of_the_corpus() {
    let corpus = sample_documents();
    let queries = [
        Query::with_term("รายงาน"),
        Query { category: Filter::Only("รายงานการเงิน".to_string()), ..Query::default() },
        Query { doc_type: Filter::Only(DocumentType::Pdf), ..Query::default() },
    ];
    let corpus_ids = ids(&corpus);
    for query in &queries {
        let result_ids = ids(&filter::search(&corpus, query));
        let mut cursor = corpus_ids.iter();
        for id in &result_ids {
            assert!(
                cursor.any(|c| c == id),
                "result order deviates from corpus order: {result_ids:?}"
            );
        }
    }
}

#[test]
fn every_hit_matches_and_every_miss_fails_the_text_predicate() {
    let corpus = sample_documents();
    let term = "ระบบ";
    let result = filter::search(&corpus, &Query::with_term(term));
    let hit_ids = ids(&result);

    let matches_somewhere = |doc: &Document| {
        doc.title.to_lowercase().contains(term)
            || doc.content.to_lowercase().contains(term)
            || doc.tags.iter().any(|tag| tag.to_lowercase().contains(term))
    };
    for doc in &corpus {
        if hit_ids.contains(&doc.id) {
            assert!(matches_somewhere(doc));
        } else {
            assert!(!matches_somewhere(doc));
        }
    }
}

#[test]
fn conjunction_equals_intersection_of_single_predicate_queries() {
    let corpus = sample_documents();
    let full = Query {
        term: "รายงาน".to_string(),
        category: Filter::Only("รายงานการเงิน".to_string()),
        doc_type: Filter::Only(DocumentType::Xlsx),
    };

    let by_term = ids(&filter::search(&corpus, &Query::with_term(full.term.clone())));
    let by_category = ids(&filter::search(
        &corpus,
        &Query { category: full.category.clone(), ..Query::default() },
    ));
    let by_type = ids(&filter::search(
        &corpus,
        &Query { doc_type: full.doc_type.clone(), ..Query::default() },
    ));

    let intersection: Vec<u32> = ids(&corpus)
        .into_iter()
        .filter(|id| by_term.contains(id) && by_category.contains(id) && by_type.contains(id))
        .collect();

    assert_eq!(ids(&filter::search(&corpus, &full)), intersection);
    assert_eq!(intersection, vec![5]);
}

// The four acceptance scenarios over the five-document demo corpus.

#[test]
fn thai_term_matches_title_but_not_category() {
    let corpus = sample_documents();
    // id 5 is in category "รายงานการเงิน" but carries the term nowhere in
    // title/content/tags, so the text predicate alone must not pull it in
    let result = filter::search(&corpus, &Query::with_term("การเงิน"));
    assert_eq!(ids(&result), vec![1]);
}

#[test]
fn category_filter_selects_both_finance_documents() {
    let corpus = sample_documents();
    let query = Query {
        category: Filter::Only("รายงานการเงิน".to_string()),
        ..Query::default()
    };
    assert_eq!(ids(&filter::search(&corpus, &query)), vec![1, 5]);
}

#[test]
fn type_filter_selects_both_pdfs_in_corpus_order() {
    let corpus = sample_documents();
    let query = Query { doc_type: Filter::Only(DocumentType::Pdf), ..Query::default() };
    assert_eq!(ids(&filter::search(&corpus, &query)), vec![1, 3]);
}

#[test]
fn unmatched_term_yields_empty_not_error() {
    let corpus = sample_documents();
    assert!(filter::search(&corpus, &Query::with_term("xyz-no-match")).is_empty());
}
