pub mod compare;

pub use compare::{cosine_similarity_matrix, SimilarityMatrix};
