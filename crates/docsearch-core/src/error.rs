use thiserror::Error;

/// Failure taxonomy for the search boundary.
///
/// The in-memory engine itself cannot fail; these arise at the edges:
/// loading a corpus, parsing query tokens, and superseded scheduled work.
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus could not be read. Retryable; callers keep showing their
    /// last-known results.
    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),

    /// A query token did not parse. Not retryable; surfaced inline.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A scheduled search was superseded before its result was applied.
    /// Dropped silently, never surfaced to the user.
    #[error("query superseded")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
