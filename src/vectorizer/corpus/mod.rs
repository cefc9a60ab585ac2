use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TermFrequency;

/// document count and per-term document frequency over the combined corpus
/// base data for the IDF calculation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    /// number of documents added
    pub doc_num: u64,
    /// term -> number of documents containing it at least once
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's distinct terms
    /// documents with no terms still count towards `doc_num`
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            if let Some(count) = self.term_counts.get_mut(term.as_ref()) {
                *count += 1;
            } else {
                self.term_counts.insert(term.as_ref().into(), 1);
            }
        }
    }

    /// Add a whole document by its term frequency
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// all terms, sorted lexicographically
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_counts.keys().map(|t| t.as_ref()).collect();
        terms.sort_unstable();
        terms
    }
}
