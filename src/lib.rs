/// This crate ranks candidate documents (resumes) against requirement documents
/// (job ads, assignments) using TF-IDF vectors and cosine similarity.
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod storage;
pub mod utils;
pub mod vectorizer;

/// Ranker
/// The top-level entry point of this crate.
/// Given a candidate corpus and a requirement corpus it:
/// - fits one vocabulary over both corpora (candidates first, requirements second)
/// - computes an L2-normalized TF-IDF vector per document
/// - computes the candidate x requirement cosine similarity matrix
/// - sorts every requirement's candidates by descending score,
///   ties broken by ascending candidate position
///
/// Every run recomputes everything from the documents it is given.
pub use pipeline::{Ranker, Rankings, RequirementRanking, ScoredCandidate};

/// Input document: stable identifier + raw text
pub use document::Document;

/// Ranking configuration
/// Defaults can be overridden with `RANKER_*` environment variables.
pub use config::RankerConfig;

/// Core errors
/// - `EmptyCorpus`: nothing to rank
/// - `EmptyVocabulary`: every token was a stop word or punctuation
/// - `DimensionMismatch`: vector / vocabulary length disagreement (a defect)
pub use error::{RankError, Result};

/// TF-IDF Vectorizer
/// Two-phase `fit` / `transform` over raw texts, generic over the weighting engine.
/// `Vocabulary` is the fitted state and is passed explicitly to `transform`.
pub use vectorizer::{TermWeightVector, TfIdfVectorizer, Vocabulary};

/// TF-IDF calculation engine trait and the default smoothed implementation
/// idf(t) = ln((1 + N) / (1 + df(t))) + 1, tf raw or sublinear
pub use vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine, TfScheme};

/// Term counts of a single document
pub use vectorizer::token::TermFrequency;

/// Similarity matrix and ranked lists
pub use vectorizer::compute::{cosine_similarity_matrix, SimilarityMatrix};
pub use vectorizer::evaluate::ranking::{RankedEntry, RankedList};
