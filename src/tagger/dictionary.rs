use std::collections::HashSet;

use ahash::RandomState;

use crate::utils::sanitize::{retain_term_chars, sanitize_word};

/// Distinct terms of a whole text.
///
/// Built from one pass over the full text, without sentence splitting.
/// The set has no meaningful iteration order; consumers that need a stable
/// order must sort on their own.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    terms: HashSet<String, RandomState>,
}

impl Dictionary {
    /// Scan `text` and collect every distinct non-empty sanitized term.
    pub fn build(text: &str) -> Self {
        let cleaned = retain_term_chars(&text.trim().to_lowercase());
        let mut terms = HashSet::with_hasher(RandomState::new());
        for word in cleaned.split_whitespace() {
            let term = sanitize_word(word);
            if !term.is_empty() {
                terms.insert(term);
            }
        }
        Self { terms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Iterate over the terms in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Consume the dictionary into a list of terms, in unspecified order.
    pub fn into_terms(self) -> Vec<String> {
        self.terms.into_iter().collect()
    }
}
