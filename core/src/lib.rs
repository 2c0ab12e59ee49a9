use serde::Serialize;

pub mod index;
pub mod query;
pub mod scorer;
pub mod search;
pub mod stop_words;
pub mod tokenizer;

pub use index::InvertedIndex;
pub use query::Query;
pub use search::{SearchConfig, SearchServer};

pub type DocId = u32;

/// Default bound on the number of documents a search returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// A ranked document and its TF-IDF relevance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub relevance: f64,
}
