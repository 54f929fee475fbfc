//! docsearch-engine
//!
//! In-memory query engine: a stable filter pass over a document corpus,
//! facet accessors for the filter dropdowns, and a debounced scheduler
//! that turns a stream of input changes into at most one search per
//! quiescence window.

pub mod debounce;
pub mod facets;
pub mod filter;
pub mod memory;

pub use debounce::{QueryDebouncer, SearchUpdate, DEFAULT_DEBOUNCE};
pub use memory::MemorySearchEngine;
