use crate::index::InvertedIndex;
use crate::scorer::score_documents;
use crate::{DocId, SearchHit};
use std::collections::{BTreeSet, HashSet};

/// Default prefix marking a term whose documents are excluded.
pub const MINUS_MARKER: char = '-';

/// A tokenized, stop-word-filtered query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Every surviving term in query order; minus-terms keep their marker.
    pub terms: Vec<String>,
    /// Minus-terms with the marker stripped.
    pub minus_terms: HashSet<String>,
}

impl Query {
    pub fn parse(index: &InvertedIndex, text: &str, minus_marker: char) -> Self {
        let terms = index.split_no_stop(text);
        let minus_terms = terms
            .iter()
            .filter_map(|t| t.strip_prefix(minus_marker))
            .map(str::to_string)
            .collect();
        Self { terms, minus_terms }
    }
}

/// Documents containing any of `minus_terms`.
pub fn banned_documents(index: &InvertedIndex, minus_terms: &HashSet<String>) -> BTreeSet<DocId> {
    minus_terms
        .iter()
        .filter_map(|t| index.postings(t))
        .flatten()
        .copied()
        .collect()
}

/// Every matched, non-banned document with its relevance, in ascending id order.
pub fn find_all_documents(index: &InvertedIndex, query: &Query) -> Vec<SearchHit> {
    let banned = banned_documents(index, &query.minus_terms);
    let hits: Vec<SearchHit> = score_documents(index, &query.terms)
        .into_iter()
        .filter(|s| s.matched && !banned.contains(&s.doc_id))
        .map(|s| SearchHit { doc_id: s.doc_id, relevance: s.relevance })
        .collect();
    tracing::trace!(terms = query.terms.len(), banned = banned.len(), hits = hits.len(), "query evaluated");
    hits
}
