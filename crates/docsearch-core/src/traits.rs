use crate::error::Result;
use crate::types::{Document, DocumentType, Query};

/// Answers filter queries over a document corpus.
///
/// The in-memory implementation is infallible; the `Result` is part of the
/// seam so a corpus backed by real I/O can report `CorpusUnavailable`
/// without changing callers.
pub trait SearchEngine: Send + Sync {
    /// Filtered view of the corpus for `query`, in corpus order.
    fn search(&self, query: &Query) -> Result<Vec<Document>>;

    /// Unique category values, first-seen corpus order.
    fn categories(&self) -> Result<Vec<String>>;

    /// Unique document types, first-seen corpus order.
    fn types(&self) -> Result<Vec<DocumentType>>;
}
