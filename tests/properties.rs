use proptest::prelude::*;

use resume_ranker::{Document, RankError, Ranker, RankerConfig};

const WORDS: &[&str] = &[
    "python", "rust", "java", "go", "sql", "engineer", "developer", "data-driven", "machine",
    "learning", "backend", "frontend", "cloud", "the", "with", "and", "of",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(text_strategy(), 0..max)
}

fn docs(prefix: &str, texts: &[String]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| Document::new(format!("{prefix}{i}"), t.clone()))
        .collect()
}

fn sequential() -> Ranker {
    Ranker::new(RankerConfig {
        parallel: false,
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn lists_are_complete_sorted_and_bounded(
        cands in corpus_strategy(8),
        reqs in corpus_strategy(4),
    ) {
        let ranker = Ranker::default();
        let lists = match ranker.rank_indices(&cands, &reqs) {
            Ok(lists) => lists,
            Err(RankError::EmptyCorpus) | Err(RankError::EmptyVocabulary { .. }) => return Ok(()),
            Err(e) => return Err(TestCaseError::fail(e.to_string())),
        };

        prop_assert_eq!(lists.len(), reqs.len());
        for (idx, list) in lists.iter().enumerate() {
            prop_assert_eq!(list.requirement, idx);

            let mut seen: Vec<usize> = list.entries.iter().map(|e| e.candidate).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..cands.len()).collect::<Vec<_>>());

            for e in &list.entries {
                prop_assert!((0.0..=1.0).contains(&e.score));
            }
            for pair in list.entries.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].candidate < pair[1].candidate);
                }
            }
        }
    }

    #[test]
    fn runs_are_bit_identical(
        cands in corpus_strategy(8),
        reqs in corpus_strategy(4),
    ) {
        let c = docs("cv", &cands);
        let r = docs("job", &reqs);
        let first = Ranker::default().rank(&c, &r);
        let second = Ranker::default().rank(&c, &r);
        let third = sequential().rank(&c, &r);
        match (first, second, third) {
            (Ok(a), Ok(b), Ok(s)) => {
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(&a, &s);
            }
            (Err(_), Err(_), Err(_)) => {}
            _ => prop_assert!(false, "runs disagreed on success"),
        }
    }

    #[test]
    fn identical_text_scores_one(text in text_strategy(), other in corpus_strategy(4)) {
        let ranker = Ranker::default();
        let normalized_has_terms = ranker
            .rank_indices(&[text.clone()], &[text.clone()])
            .is_ok();
        prop_assume!(normalized_has_terms);

        let mut cands = other.clone();
        cands.push(text.clone());
        let lists = ranker.rank_indices(&cands, &[text]).unwrap();
        let own = lists[0]
            .entries
            .iter()
            .find(|e| e.candidate == cands.len() - 1)
            .unwrap();
        prop_assert!((own.score - 1.0).abs() < 1e-9);
    }
}

#[test]
fn disjoint_documents_score_exactly_zero() {
    let lists = Ranker::default()
        .rank_indices(&["python machine learning"], &["java backend"])
        .unwrap();
    assert_eq!(lists[0].entries[0].score, 0.0);
}
