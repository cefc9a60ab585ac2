use thiserror::Error;

/// Errors raised by the ranking core
#[derive(Debug, Error)]
pub enum RankError {
    /// Combined candidate + requirement corpus has no documents
    #[error("combined corpus is empty: nothing to rank")]
    EmptyCorpus,

    /// Every token of every document was filtered out (stop words, empty text)
    #[error("no usable terms in {documents} documents after stop-word filtering")]
    EmptyVocabulary { documents: usize },

    /// A term-weight vector does not match the vocabulary dimension.
    /// The vectorizer guarantees equal lengths, so this is a defect.
    #[error("vector dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, RankError>;
