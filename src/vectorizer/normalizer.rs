/// Text normalizer
/// lowercases, strips punctuation and symbols (ASCII or Unicode) except `-`,
/// and splits on whitespace.
/// Hyphenated compounds ("data-driven", "full-stack") stay a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    /// tokens shorter than this (in chars) are dropped
    pub min_token_len: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { min_token_len: 1 }
    }
}

impl Normalizer {
    pub fn new(min_token_len: usize) -> Self {
        Self { min_token_len }
    }

    /// Canonical form of `text`: lowercased, punctuation removed, trimmed
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped: String = lowered
            .chars()
            .filter(|c| !is_stripped(*c))
            .collect();
        stripped.trim().to_string()
    }

    /// Normalized token stream of `text`
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .filter(|tok| tok.chars().count() >= self.min_token_len)
            .map(str::to_string)
            .collect()
    }
}

/// anything that is not a letter, digit, whitespace or `-`
#[inline]
fn is_stripped(c: char) -> bool {
    !(c.is_alphanumeric() || c.is_whitespace() || c == '-')
}
