use crate::index::InvertedIndex;
use crate::query::{find_all_documents, Query, MINUS_MARKER};
use crate::tokenizer::DEFAULT_SEPARATOR;
use crate::{DocId, SearchHit, MAX_RESULT_DOCUMENT_COUNT};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub separator: char,
    pub minus_marker: char,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR, minus_marker: MINUS_MARKER, max_results: MAX_RESULT_DOCUMENT_COUNT }
    }
}

impl SearchConfig {
    pub fn with_separator(mut self, separator: char) -> Self { self.separator = separator; self }
    pub fn with_minus_marker(mut self, marker: char) -> Self { self.minus_marker = marker; self }
    pub fn with_max_results(mut self, max_results: usize) -> Self { self.max_results = max_results; self }
}

/// Index plus query entry point.
///
/// Indexing needs `&mut self`; queries only borrow, so a finished server can
/// be shared read-only.
#[derive(Debug, Clone)]
pub struct SearchServer {
    config: SearchConfig,
    index: InvertedIndex,
}

impl Default for SearchServer {
    fn default() -> Self { Self::new(SearchConfig::default()) }
}

impl SearchServer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, index: InvertedIndex::with_separator(config.separator) }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn set_stop_words(&mut self, text: &str) { self.index.set_stop_words(text); }

    pub fn add_document(&mut self, doc_id: DocId, text: &str) { self.index.add_document(doc_id, text); }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn parse_query(&self, text: &str) -> Query {
        Query::parse(&self.index, text, self.config.minus_marker)
    }

    /// Matched, non-excluded documents in ascending id order.
    pub fn find_all_documents(&self, query: &str) -> Vec<SearchHit> {
        find_all_documents(&self.index, &self.parse_query(query))
    }

    /// Best `max_results` documents, highest relevance first.
    pub fn find_top_documents(&self, query: &str) -> Vec<SearchHit> {
        let hits = self.find_all_documents(query);
        let total_hits = hits.len();
        let top = top_k(hits, self.config.max_results);
        tracing::debug!(query, total_hits, returned = top.len(), "search");
        top
    }
}

/// Sort by relevance descending and keep the first `k`.
///
/// The sort is stable, so ties keep their input order.
pub fn top_k(mut hits: Vec<SearchHit>, k: usize) -> Vec<SearchHit> {
    hits.sort_by(|a, b| b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal));
    hits.truncate(k);
    hits
}
