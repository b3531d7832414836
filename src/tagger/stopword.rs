use std::collections::HashSet;

use ahash::RandomState;

use crate::data::stopwords;

/// Set of words that never become tags.
///
/// Matching is exact and case-sensitive; terms are lowercase by the time
/// they are checked, so words should be supplied lowercase.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String, RandomState>,
}

impl StopWords {
    /// Empty set, filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from any list of words.
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// Built-in English list.
    pub fn english() -> Self {
        Self::from_words(stopwords::ENGLISH)
    }

    /// Built-in Indonesian list.
    pub fn indonesian() -> Self {
        Self::from_words(stopwords::INDONESIAN)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep only non-empty terms that are not stop words.
    pub fn filter(&self, terms: Vec<String>) -> Vec<String> {
        terms
            .into_iter()
            .filter(|term| !term.is_empty() && !self.contains(term))
            .collect()
    }
}
