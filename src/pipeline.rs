//! End-to-end ranking run: joint fit over both corpora, cosine matrix, per-requirement ranking.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::RankerConfig,
    document::Document,
    error::{RankError, Result},
    vectorizer::{
        compute::cosine_similarity_matrix,
        evaluate::ranking::{rank_all, RankedList},
        TfIdfVectorizer,
    },
};

/// Candidate identifier with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate_id: Box<str>,
    pub score: f64,
}

/// Ordered candidates for one requirement document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRanking {
    pub requirement_id: Box<str>,
    pub candidates: Vec<ScoredCandidate>,
}

/// Result of one run, in requirement-corpus order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rankings {
    pub requirements: Vec<RequirementRanking>,
}

impl Rankings {
    #[inline]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn get(&self, requirement_id: &str) -> Option<&RequirementRanking> {
        self.requirements
            .iter()
            .find(|r| r.requirement_id.as_ref() == requirement_id)
    }
}

/// Ranks candidates against requirements
#[derive(Debug, Clone)]
pub struct Ranker {
    config: RankerConfig,
    vectorizer: TfIdfVectorizer,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(RankerConfig::default())
    }
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        let vectorizer = TfIdfVectorizer::new(&config);
        Self { config, vectorizer }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Index-level ranking: one `RankedList` per requirement
    /// candidate texts first, requirement texts second; vocabulary is fitted on both
    pub fn rank_indices<S>(&self, candidates: &[S], requirements: &[S]) -> Result<Vec<RankedList>>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.is_empty() && requirements.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        if candidates.is_empty() {
            debug!(requirements = requirements.len(), "no candidates, emitting empty lists");
            return Ok((0..requirements.len())
                .map(|idx| RankedList::new(idx, Vec::new()))
                .collect());
        }
        if requirements.is_empty() {
            debug!(candidates = candidates.len(), "no requirements, nothing to rank");
            return Ok(Vec::new());
        }

        let boundary = candidates.len();
        let combined: Vec<&str> = candidates
            .iter()
            .chain(requirements.iter())
            .map(|s| s.as_ref())
            .collect();

        let (vocab, vectors) = self.vectorizer.fit_transform(&combined)?;
        debug!(
            documents = combined.len(),
            vocabulary = vocab.len(),
            "fitted vocabulary"
        );

        let (cand_vecs, req_vecs) = vectors.split_at(boundary);
        let matrix = cosine_similarity_matrix(cand_vecs, req_vecs, vocab.len(), self.config.parallel)?;
        debug!(rows = matrix.rows(), cols = matrix.cols(), "computed similarity matrix");

        Ok(rank_all(&matrix))
    }

    /// Rank documents and map indices back to identifiers
    pub fn rank(&self, candidates: &[Document], requirements: &[Document]) -> Result<Rankings> {
        let cand_texts: Vec<&str> = candidates.iter().map(|d| d.text.as_str()).collect();
        let req_texts: Vec<&str> = requirements.iter().map(|d| d.text.as_str()).collect();
        let lists = self.rank_indices(&cand_texts, &req_texts)?;

        let requirements: Vec<RequirementRanking> = lists
            .into_iter()
            .map(|list| RequirementRanking {
                requirement_id: requirements[list.requirement].id.clone(),
                candidates: list
                    .entries
                    .iter()
                    .map(|e| ScoredCandidate {
                        candidate_id: candidates[e.candidate].id.clone(),
                        score: e.score,
                    })
                    .collect(),
            })
            .collect();

        info!(
            candidates = candidates.len(),
            requirements = requirements.len(),
            "ranking complete"
        );
        Ok(Rankings { requirements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(pairs: &[(&str, &str)]) -> Vec<Document> {
        pairs.iter().map(|(id, text)| Document::new(*id, *text)).collect()
    }

    #[test]
    fn python_candidate_beats_java_candidate() {
        let candidates = docs(&[
            ("A", "python developer with machine learning experience"),
            ("B", "java backend engineer"),
        ]);
        let requirements = docs(&[("Job1", "seeking python machine learning engineer")]);
        let rankings = Ranker::default().rank(&candidates, &requirements).unwrap();

        let job = rankings.get("Job1").unwrap();
        assert_eq!(job.candidates.len(), 2);
        assert_eq!(job.candidates[0].candidate_id.as_ref(), "A");
        assert_eq!(job.candidates[1].candidate_id.as_ref(), "B");
        assert!(job.candidates[0].score > job.candidates[1].score);
        // B shares only "engineer"
        assert!(job.candidates[1].score < 0.3);
    }

    #[test]
    fn empty_candidate_corpus_yields_empty_lists() {
        let requirements = docs(&[("Job1", "rust"), ("Job2", "the of")]);
        let rankings = Ranker::default().rank(&[], &requirements).unwrap();
        assert_eq!(rankings.len(), 2);
        assert!(rankings.requirements.iter().all(|r| r.candidates.is_empty()));
        assert_eq!(rankings.requirements[1].requirement_id.as_ref(), "Job2");
    }

    #[test]
    fn empty_requirement_corpus_yields_no_rankings() {
        let candidates = docs(&[("A", "rust")]);
        let rankings = Ranker::default().rank(&candidates, &[]).unwrap();
        assert!(rankings.is_empty());

        // no vocabulary is fitted, so stop-word-only candidates are fine too
        let candidates = docs(&[("A", "the a")]);
        let rankings = Ranker::default().rank(&candidates, &[]).unwrap();
        assert!(rankings.is_empty());
    }

    #[test]
    fn both_empty_is_an_error() {
        let err = Ranker::default().rank(&[], &[]).unwrap_err();
        assert!(matches!(err, RankError::EmptyCorpus));
    }

    #[test]
    fn all_stop_words_is_a_vocabulary_error() {
        let candidates = docs(&[("A", "the a an")]);
        let requirements = docs(&[("Job1", "of the")]);
        let err = Ranker::default().rank(&candidates, &requirements).unwrap_err();
        assert!(matches!(err, RankError::EmptyVocabulary { documents: 2 }));
    }

    #[test]
    fn stop_word_document_scores_zero() {
        let candidates = docs(&[("A", "the a an of"), ("B", "rust compiler")]);
        let requirements = docs(&[("Job1", "rust compiler engineer")]);
        let rankings = Ranker::default().rank(&candidates, &requirements).unwrap();
        let job = rankings.get("Job1").unwrap();
        assert_eq!(job.candidates[0].candidate_id.as_ref(), "B");
        assert_eq!(job.candidates[1].candidate_id.as_ref(), "A");
        assert_eq!(job.candidates[1].score, 0.0);
    }

    #[test]
    fn empty_requirement_text_scores_zero_everywhere() {
        let candidates = docs(&[("A", "rust"), ("B", "go")]);
        let requirements = docs(&[("Empty", ""), ("Job", "go")]);
        let rankings = Ranker::default().rank(&candidates, &requirements).unwrap();
        let empty = rankings.get("Empty").unwrap();
        assert!(empty.candidates.iter().all(|c| c.score == 0.0));
        let ids: Vec<&str> = empty.candidates.iter().map(|c| c.candidate_id.as_ref()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn shared_bullets_do_not_count_as_overlap() {
        let candidates = docs(&[("A", "• rust"), ("B", "• java")]);
        let requirements = docs(&[("Job", "• go")]);
        let rankings = Ranker::default().rank(&candidates, &requirements).unwrap();
        let job = rankings.get("Job").unwrap();
        assert!(job.candidates.iter().all(|c| c.score == 0.0));
    }

    #[test]
    fn self_similarity_is_one() {
        let text = "Full-stack engineer: Rust, TypeScript, PostgreSQL; data-driven.";
        let candidates = docs(&[("A", text), ("B", "gardening tips")]);
        let requirements = docs(&[("Job", text)]);
        let rankings = Ranker::default().rank(&candidates, &requirements).unwrap();
        let job = rankings.get("Job").unwrap();
        assert_eq!(job.candidates[0].candidate_id.as_ref(), "A");
        assert!((job.candidates[0].score - 1.0).abs() < 1e-9);
        assert_eq!(job.candidates[1].score, 0.0);
    }

    #[test]
    fn rank_indices_keeps_requirement_order() {
        let ranker = Ranker::default();
        let lists = ranker
            .rank_indices(&["rust", "go"], &["go", "rust", "java"])
            .unwrap();
        assert_eq!(lists.len(), 3);
        for (idx, list) in lists.iter().enumerate() {
            assert_eq!(list.requirement, idx);
            assert_eq!(list.len(), 2);
        }
        assert_eq!(lists[0].entries[0].candidate, 1);
        assert_eq!(lists[1].entries[0].candidate, 0);
        // java matches nobody: index order
        assert_eq!(lists[2].entries[0].candidate, 0);
        assert_eq!(lists[2].entries[0].score, 0.0);
    }
}
