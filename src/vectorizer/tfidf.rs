use std::{fmt, str::FromStr};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{corpus::CorpusStats, token::TermFrequency};

/// Term-frequency scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TfScheme {
    /// raw count
    #[default]
    Raw,
    /// 1 + ln(count)
    Sublinear,
}

impl FromStr for TfScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(TfScheme::Raw),
            "sublinear" => Ok(TfScheme::Sublinear),
            other => Err(format!("unknown tf scheme '{other}'")),
        }
    }
}

impl fmt::Display for TfScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfScheme::Raw => f.write_str("raw"),
            TfScheme::Sublinear => f.write_str("sublinear"),
        }
    }
}

/// TF-IDF weighting strategy
/// plug a different engine into `TfIdfVectorizer<E>` to change the weighting
pub trait TfIdfEngine {
    /// weight of a term seen `count` times in one document
    fn tf(&self, count: u32) -> f64;

    /// inverse document frequency; must be > 0 for every vocabulary term
    fn idf(&self, doc_num: u64, doc_freq: u64) -> f64;

    /// IDF vector aligned with `vocab`
    fn idf_vec(&self, corpus: &CorpusStats, vocab: &IndexSet<Box<str>>) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        vocab
            .iter()
            .map(|term| self.idf(doc_num, corpus.get_term_count(term)))
            .collect()
    }

    /// dense tf vector aligned with `vocab`, out-of-vocabulary terms are ignored
    fn tf_vec(&self, freq: &TermFrequency, vocab: &IndexSet<Box<str>>) -> Vec<f64> {
        let mut tf_vec = vec![0.0; vocab.len()];
        for (term, count) in freq.iter() {
            if let Some(idx) = vocab.get_index_of(term) {
                tf_vec[idx] = self.tf(count);
            }
        }
        tf_vec
    }
}

/// smoothed TF-IDF
/// idf(t) = ln((1 + N) / (1 + df(t))) + 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultTfIdfEngine {
    pub scheme: TfScheme,
}

impl DefaultTfIdfEngine {
    pub fn new(scheme: TfScheme) -> Self {
        Self { scheme }
    }
}

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn tf(&self, count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        match self.scheme {
            TfScheme::Raw => count as f64,
            TfScheme::Sublinear => 1.0 + (count as f64).ln(),
        }
    }

    #[inline]
    fn idf(&self, doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}
