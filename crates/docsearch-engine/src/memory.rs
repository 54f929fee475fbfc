use std::sync::Arc;

use docsearch_core::error::Result;
use docsearch_core::traits::SearchEngine;
use docsearch_core::types::{Document, DocumentType, Query};

use crate::{facets, filter};

/// Corpus-held-in-memory engine. The documents live behind an `Arc` so
/// scheduled searches can share them across tasks without copying.
pub struct MemorySearchEngine {
    corpus: Arc<Vec<Document>>,
}

impl MemorySearchEngine {
    pub fn new(corpus: Vec<Document>) -> Self {
        Self { corpus: Arc::new(corpus) }
    }

    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }
}

impl SearchEngine for MemorySearchEngine {
    fn search(&self, query: &Query) -> Result<Vec<Document>> {
        Ok(filter::search(&self.corpus, query))
    }

    fn categories(&self) -> Result<Vec<String>> {
        Ok(facets::distinct_categories(&self.corpus))
    }

    fn types(&self) -> Result<Vec<DocumentType>> {
        Ok(facets::distinct_types(&self.corpus))
    }
}
