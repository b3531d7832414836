use indexmap::IndexSet;

use crate::utils::sanitize::sanitize_word;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Deduplicated sentences of a text, each an ordered list of sanitized terms.
///
/// Sentences act as the pseudo-documents for document frequency.
/// Every stored token is already sanitized and non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentences {
    sentences: Vec<Vec<String>>,
    /// total number of tokens over all kept sentences
    token_sum: usize,
}

impl Sentences {
    /// Split `text` on `.`, `!` and `?`, sanitize every word and drop repeated
    /// sentences, keeping the first occurrence of each.
    pub fn segment(text: &str) -> Self {
        let mut sentences: Vec<Vec<String>> = Vec::new();
        let mut sentence: Vec<String> = Vec::new();
        for word in text.trim().split_whitespace() {
            let word = word.to_lowercase();
            if word.contains(SENTENCE_TERMINATORS) {
                let stripped: String = word.chars().filter(|c| !SENTENCE_TERMINATORS.contains(c)).collect();
                let term = sanitize_word(&stripped);
                if !term.is_empty() {
                    sentence.push(term);
                }
                if !sentence.is_empty() {
                    sentences.push(std::mem::take(&mut sentence));
                }
            } else {
                let term = sanitize_word(&word);
                if !term.is_empty() {
                    sentence.push(term);
                }
            }
        }
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        Self::from_unique(sentences)
    }

    /// Keep the first occurrence of each sentence, compared by its
    /// space-joined form.
    fn from_unique(sentences: Vec<Vec<String>>) -> Self {
        let unique: IndexSet<String> = sentences.iter().map(|s| s.join(" ")).collect();
        let sentences: Vec<Vec<String>> = unique
            .iter()
            .map(|joined| joined.split_whitespace().map(str::to_string).collect())
            .collect();
        let token_sum = sentences.iter().map(Vec::len).sum();
        Self { sentences, token_sum }
    }

    /// Number of kept sentences.
    #[inline]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count over all kept sentences.
    #[inline]
    pub fn token_sum(&self) -> usize {
        self.token_sum
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.sentences.iter().map(Vec::as_slice)
    }

    /// All tokens of all sentences, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().flatten().map(String::as_str)
    }

    /// Number of sentences that contain `term` at least once.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.sentences
            .iter()
            .filter(|sentence| sentence.iter().any(|token| token == term))
            .count()
    }

    /// Raw number of occurrences of `term` across all sentences.
    pub fn term_count(&self, term: &str) -> usize {
        self.tokens().filter(|&token| token == term).count()
    }
}
