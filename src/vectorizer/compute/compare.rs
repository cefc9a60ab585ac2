use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{RankError, Result},
    utils::math::dot,
    vectorizer::TermWeightVector,
};

/// Dense [candidates x requirements] cosine similarity matrix, row-major
/// row = candidate index, column = requirement index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// score of candidate `row` against requirement `col`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// scores of every candidate against requirement `col`, in candidate order
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        let cols = self.cols;
        (0..self.rows).map(move |row| self.values[row * cols + col])
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }
}

/// コサイン類似度 for every (candidate, requirement) pair
/// cos(θ) = a・b since both sides are L2-normalized.
/// Values are clamped to [0, 1]; weights are non-negative so only the
/// last-ulp overshoot of identical directions is ever clamped.
pub fn cosine_similarity_matrix(
    candidates: &[TermWeightVector],
    requirements: &[TermWeightVector],
    dim: usize,
    parallel: bool,
) -> Result<SimilarityMatrix> {
    for v in candidates.iter().chain(requirements.iter()) {
        if v.dim() != dim {
            return Err(RankError::DimensionMismatch {
                expected: dim,
                found: v.dim(),
            });
        }
    }

    let row = |cand: &TermWeightVector| -> Vec<f64> {
        requirements
            .iter()
            .map(|req| dot(&cand.weights, &req.weights).clamp(0.0, 1.0))
            .collect()
    };
    let rows: Vec<Vec<f64>> = if parallel {
        candidates.par_iter().map(row).collect()
    } else {
        candidates.iter().map(row).collect()
    };

    Ok(SimilarityMatrix {
        rows: candidates.len(),
        cols: requirements.len(),
        values: rows.into_iter().flatten().collect(),
    })
}
