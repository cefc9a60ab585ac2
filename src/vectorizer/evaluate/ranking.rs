use std::{cmp::Ordering, fmt::Debug};

use serde::{Deserialize, Serialize};

use crate::vectorizer::compute::SimilarityMatrix;

/// One candidate's score against a requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// position in the candidate corpus
    pub candidate: usize,
    pub score: f64,
}

/// Candidates ordered for one requirement
pub struct RankedList {
    /// position in the requirement corpus
    pub requirement: usize,
    pub entries: Vec<RankedEntry>,
}

/// Ranking order: score descending, then candidate index ascending
#[inline]
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.candidate.cmp(&b.candidate))
}

impl RankedList {
    pub fn new(requirement: usize, entries: Vec<RankedEntry>) -> Self {
        Self { requirement, entries }
    }

    /// Sort by descending score, ties by ascending candidate index
    /// the comparator is total, so the result does not depend on sort stability
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.entries.sort_unstable_by(compare_entries);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for RankedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one entry per line
            writeln!(f, "RankedList #{} [", self.requirement)?;
            for e in &self.entries {
                writeln!(f, "    {}: {:.6}", e.candidate, e.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_struct("RankedList")
                .field("requirement", &self.requirement)
                .field("entries", &self.entries)
                .finish()
        }
    }
}

/// Ranked list for requirement column `col`
pub fn rank_column(matrix: &SimilarityMatrix, col: usize) -> RankedList {
    let entries = matrix
        .column(col)
        .enumerate()
        .map(|(candidate, score)| RankedEntry { candidate, score })
        .collect();
    let mut list = RankedList::new(col, entries);
    list.sort_by_score();
    list
}

/// One ranked list per requirement, in requirement order
pub fn rank_all(matrix: &SimilarityMatrix) -> Vec<RankedList> {
    (0..matrix.cols()).map(|col| rank_column(matrix, col)).collect()
}
