use crate::stop_words::StopWords;
use crate::tokenizer::{split_into_words, DEFAULT_SEPARATOR};
use crate::DocId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Term -> documents index plus the filtered term sequence of every document.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    separator: char,
    stop_words: StopWords,
    /// Filtered terms per document, in text order. Used for term counts at query time.
    documents: BTreeMap<DocId, Vec<String>>,
    postings: HashMap<String, BTreeSet<DocId>>,
    /// Number of add_document calls, duplicates included.
    num_docs: usize,
}

impl Default for InvertedIndex {
    fn default() -> Self { Self::with_separator(DEFAULT_SEPARATOR) }
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            stop_words: StopWords::new(),
            documents: BTreeMap::new(),
            postings: HashMap::new(),
            num_docs: 0,
        }
    }

    pub fn separator(&self) -> char { self.separator }

    /// Add the tokens of `text` to the stop-word set.
    ///
    /// Documents already indexed keep their terms.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text, self.separator);
        tracing::debug!(stop_words = self.stop_words.len(), "stop words updated");
    }

    pub fn is_stop_word(&self, term: &str) -> bool { self.stop_words.contains(term) }

    /// Tokenize `text` and drop stop-words.
    pub fn split_no_stop(&self, text: &str) -> Vec<String> {
        self.stop_words.filter(split_into_words(text, self.separator))
    }

    /// Index `text` under `doc_id`.
    ///
    /// Re-adding an id replaces its stored terms but leaves the postings of
    /// the previous text in place, and counts as another document.
    pub fn add_document(&mut self, doc_id: DocId, text: &str) {
        let terms = self.split_no_stop(text);
        for term in &terms {
            self.postings.entry(term.clone()).or_default().insert(doc_id);
        }
        self.num_docs += 1;
        tracing::debug!(doc_id, terms = terms.len(), num_docs = self.num_docs, "indexed document");
        if self.documents.insert(doc_id, terms).is_some() {
            tracing::warn!(doc_id, "document id re-added; previous postings retained");
        }
    }

    pub fn document_count(&self) -> usize { self.num_docs }

    /// Number of documents whose postings contain `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, BTreeSet::len)
    }

    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocId>> { self.postings.get(term) }

    pub fn document_terms(&self, doc_id: DocId) -> Option<&[String]> {
        self.documents.get(&doc_id).map(Vec::as_slice)
    }

    /// Stored documents in ascending id order.
    pub fn documents(&self) -> impl Iterator<Item = (DocId, &[String])> + '_ {
        self.documents.iter().map(|(id, terms)| (*id, terms.as_slice()))
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }
}
