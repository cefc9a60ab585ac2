use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///  TermFrequency
/// counts term occurrences within one document.
/// Terms keep first-seen order; the count map is the raw tf input of the weighting engine.
///
/// # Examples
/// ```
/// use resume_ranker::vectorizer::token::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["rust", "cargo", "rust"]);
/// assert_eq!(freq.term_count("rust"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<Box<str>, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// count one occurrence of `term`
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.into(), 1);
        }
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// occurrences of `term`, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// (term, count) in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, &c)| (t.as_ref(), c))
    }

    /// distinct terms in first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|t| t.as_ref()).collect()
    }

    /// total number of counted tokens
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}
