pub mod compute;
pub mod corpus;
pub mod evaluate;
pub mod normalizer;
pub mod stop_words;
pub mod tfidf;
pub mod token;

use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    config::RankerConfig,
    error::{RankError, Result},
    utils::math::l2_normalize,
    vectorizer::{
        corpus::CorpusStats,
        normalizer::Normalizer,
        stop_words::is_stop_word,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
        token::TermFrequency,
    },
};

/// Fitted vocabulary
/// term -> column index (lexicographic), plus the IDF of each column.
/// Frozen once built; vectors are only valid against the vocabulary they were transformed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// column index = position in the set
    pub terms: IndexSet<Box<str>>,
    /// IDF per column
    pub idf_vec: Vec<f64>,
    /// document frequency per column
    pub doc_freq: Vec<u64>,
    /// number of documents the vocabulary was fitted on
    pub doc_num: u64,
}

impl Vocabulary {
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get_index(idx).map(|t| t.as_ref())
    }

    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|idx| self.idf_vec[idx])
    }
}

/// L2-normalized TF-IDF weights of one document
/// length always equals the vocabulary size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeightVector {
    pub weights: Vec<f64>,
    /// in-vocabulary tokens of the document
    pub term_sum: u64,
}

impl TermWeightVector {
    #[inline]
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// no vocabulary term present
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }
}

/// TF-IDF Vectorizer
/// Two-phase: `fit` builds a `Vocabulary` from the combined corpus,
/// `transform` turns texts into vectors against a given `Vocabulary`.
///
/// `E` is the weighting engine, `DefaultTfIdfEngine` by default.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine + Send + Sync,
{
    pub engine: E,
    pub normalizer: Normalizer,
    /// drop English stop words
    pub stop_words: bool,
    /// analyze documents with rayon
    pub parallel: bool,
}

impl TfIdfVectorizer<DefaultTfIdfEngine> {
    pub fn new(config: &RankerConfig) -> Self {
        Self::with_engine(DefaultTfIdfEngine::new(config.tf_scheme), config)
    }
}

impl Default for TfIdfVectorizer<DefaultTfIdfEngine> {
    fn default() -> Self {
        Self::new(&RankerConfig::default())
    }
}

impl<E> TfIdfVectorizer<E>
where
    E: TfIdfEngine + Send + Sync,
{
    pub fn with_engine(engine: E, config: &RankerConfig) -> Self {
        Self {
            engine,
            normalizer: Normalizer::new(config.min_token_len),
            stop_words: config.stop_words,
            parallel: config.parallel,
        }
    }

    /// normalize + stop-word filter one text
    pub fn analyze(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        for token in self.normalizer.tokens(text) {
            if self.stop_words && is_stop_word(&token) {
                continue;
            }
            freq.add_term(&token);
        }
        freq
    }

    /// analyze every text, keeping input order
    pub fn analyze_all<S>(&self, texts: &[S]) -> Vec<TermFrequency>
    where
        S: AsRef<str> + Sync,
    {
        if self.parallel {
            texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
        } else {
            texts.iter().map(|t| self.analyze(t.as_ref())).collect()
        }
    }

    /// Build the vocabulary from the combined corpus
    pub fn fit<S>(&self, texts: &[S]) -> Result<Vocabulary>
    where
        S: AsRef<str> + Sync,
    {
        let freqs = self.analyze_all(texts);
        self.fit_freqs(&freqs)
    }

    /// Vectorize texts against a fitted vocabulary
    pub fn transform<S>(&self, texts: &[S], vocab: &Vocabulary) -> Vec<TermWeightVector>
    where
        S: AsRef<str> + Sync,
    {
        let freqs = self.analyze_all(texts);
        self.transform_freqs(&freqs, vocab)
    }

    /// `fit` then `transform` on the same texts, analyzing each text once
    pub fn fit_transform<S>(&self, texts: &[S]) -> Result<(Vocabulary, Vec<TermWeightVector>)>
    where
        S: AsRef<str> + Sync,
    {
        let freqs = self.analyze_all(texts);
        let vocab = self.fit_freqs(&freqs)?;
        let vectors = self.transform_freqs(&freqs, &vocab);
        Ok((vocab, vectors))
    }

    fn fit_freqs(&self, freqs: &[TermFrequency]) -> Result<Vocabulary> {
        if freqs.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        let mut corpus = CorpusStats::new();
        for freq in freqs {
            corpus.add_doc(freq);
        }
        if corpus.vocab_size() == 0 {
            return Err(RankError::EmptyVocabulary {
                documents: freqs.len(),
            });
        }

        let terms: IndexSet<Box<str>> = corpus
            .sorted_terms()
            .into_iter()
            .map(Box::<str>::from)
            .collect();
        let idf_vec = self.engine.idf_vec(&corpus, &terms);
        let doc_freq = terms.iter().map(|t| corpus.get_term_count(t)).collect();
        Ok(Vocabulary {
            terms,
            idf_vec,
            doc_freq,
            doc_num: corpus.get_doc_num(),
        })
    }

    fn transform_freqs(&self, freqs: &[TermFrequency], vocab: &Vocabulary) -> Vec<TermWeightVector> {
        let weigh = |freq: &TermFrequency| {
            let mut weights = self.engine.tf_vec(freq, &vocab.terms);
            for (w, idf) in weights.iter_mut().zip(vocab.idf_vec.iter()) {
                *w *= *idf;
            }
            l2_normalize(&mut weights);
            let term_sum = freq
                .iter()
                .filter(|(term, _)| vocab.index_of(term).is_some())
                .map(|(_, count)| count as u64)
                .sum();
            TermWeightVector { weights, term_sum }
        };
        if self.parallel {
            freqs.par_iter().map(weigh).collect()
        } else {
            freqs.iter().map(weigh).collect()
        }
    }
}
