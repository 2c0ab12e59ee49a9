//! TF-IDF relevance over the stored term sequences.
//!
//! IDF is `ln(N / df)` with `N` the number of indexed documents; TF is the
//! raw count of a term in a document divided by the document length.

use crate::index::InvertedIndex;
use crate::DocId;
use std::collections::HashMap;

/// Relevance of one document for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentScore {
    pub doc_id: DocId,
    /// Sum of TF x IDF over the query terms.
    pub relevance: f64,
    /// At least one query term occurs in the document.
    pub matched: bool,
}

impl DocumentScore {
    /// Relevance with unmatched documents pinned to -1, so that a `>= 0`
    /// cut keeps exactly the matched ones.
    pub fn gated_relevance(&self) -> f64 {
        if self.matched { self.relevance } else { -1.0 }
    }
}

/// Inverse document frequency of a term; 0 for terms with no postings.
pub fn inverse_document_frequency(index: &InvertedIndex, term: &str) -> f64 {
    let df = index.document_frequency(term);
    if df == 0 {
        return 0.0;
    }
    (index.document_count() as f64 / df as f64).ln()
}

/// IDF of every distinct term in `query`.
pub fn idf_table<'q>(index: &InvertedIndex, query: &'q [String]) -> HashMap<&'q str, f64> {
    let mut table = HashMap::with_capacity(query.len());
    for term in query {
        table
            .entry(term.as_str())
            .or_insert_with(|| inverse_document_frequency(index, term));
    }
    table
}

/// Occurrences of `term` divided by the document length; 0 for empty documents.
pub fn term_frequency(terms: &[String], term: &str) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let count = terms.iter().filter(|t| t.as_str() == term).count();
    count as f64 / terms.len() as f64
}

/// Score every stored document against `query`, in ascending id order.
///
/// Every occurrence of a query term contributes, so a repeated term weighs
/// twice.
pub fn score_documents(index: &InvertedIndex, query: &[String]) -> Vec<DocumentScore> {
    let idf = idf_table(index, query);
    index
        .documents()
        .map(|(doc_id, terms)| {
            let mut relevance = 0.0;
            let mut matched = false;
            for term in query {
                let tf = term_frequency(terms, term);
                if tf > 0.0 {
                    matched = true;
                }
                relevance += tf * idf[term.as_str()];
            }
            DocumentScore { doc_id, relevance, matched }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.add_document(0, "white cat fashion collar");
        index.add_document(1, "fluffy cat fluffy tail");
        index.add_document(2, "groomed dog expressive eyes");
        index
    }

    #[test]
    fn idf_values() {
        let index = index();
        assert_eq!(inverse_document_frequency(&index, "unknown"), 0.0);
        let cat = inverse_document_frequency(&index, "cat");
        let dog = inverse_document_frequency(&index, "dog");
        assert!((cat - (3.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((dog - 3.0f64.ln()).abs() < 1e-12);
        assert!(dog > cat);
    }

    #[test]
    fn idf_table_is_per_distinct_term() {
        let index = index();
        let query = words(&["cat", "cat", "dog"]);
        assert_eq!(idf_table(&index, &query).len(), 2);
    }

    #[test]
    fn tf_of_empty_document_is_zero() {
        assert_eq!(term_frequency(&[], "cat"), 0.0);
        assert_eq!(term_frequency(&words(&["cat", "dog"]), "cat"), 0.5);
    }

    #[test]
    fn unmatched_documents_are_gated() {
        let index = index();
        let scores = score_documents(&index, &words(&["fluffy"]));
        assert_eq!(scores.len(), 3);
        assert!(scores[1].matched);
        assert!((scores[1].relevance - 0.5 * 3.0f64.ln()).abs() < 1e-12);
        assert!(!scores[0].matched);
        assert_eq!(scores[0].relevance, 0.0);
        assert_eq!(scores[0].gated_relevance(), -1.0);
    }

    #[test]
    fn term_in_every_document_still_matches() {
        let mut index = InvertedIndex::new();
        index.add_document(0, "cat");
        index.add_document(1, "cat dog");
        let scores = score_documents(&index, &words(&["cat"]));
        assert!(scores.iter().all(|s| s.matched));
        assert!(scores.iter().all(|s| s.gated_relevance() == 0.0));
    }

    #[test]
    fn repeated_query_terms_count_per_occurrence() {
        let index = index();
        let once = score_documents(&index, &words(&["fluffy"]));
        let twice = score_documents(&index, &words(&["fluffy", "fluffy"]));
        assert!((twice[1].relevance - 2.0 * once[1].relevance).abs() < 1e-12);
    }
}
