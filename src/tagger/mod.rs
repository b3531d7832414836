pub mod config;
pub mod dictionary;
pub mod language;
pub mod pos;
pub mod ranking;
pub mod sentence;
pub mod stopword;
pub mod term;
pub mod tfidf;

use std::{marker::PhantomData, sync::Arc};

use tracing::{debug, trace};

use crate::{
    error::Result,
    tagger::{
        config::TaggerConfig,
        dictionary::Dictionary,
        language::{Language, LanguageProfile},
        pos::{BoostPolicy, Vocabulary},
        sentence::Sentences,
        stopword::StopWords,
        term::TermScore,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
    },
    utils::pool,
};

/// Tag extractor.
///
/// Holds the active language (stop words and optional POS table) and scores
/// texts with sentence-level TF-IDF. Configuration changes take `&mut self`,
/// so they can never overlap a running `get_tags` call; a configured tagger
/// can be shared between threads.
///
/// `Tagger<E>` is generic over the calculation engine `E`
/// (default: [`DefaultTfIdfEngine`]).
#[derive(Debug, Clone)]
pub struct Tagger<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    profile: LanguageProfile,
    /// POS table attached whenever `"id"` is selected
    indonesian: Arc<Vocabulary>,
    workers: Option<usize>,
    boost_policy: BoostPolicy,
    _marker: PhantomData<E>,
}

impl Tagger<DefaultTfIdfEngine> {
    /// English tagger with the default engine.
    pub fn new() -> Self {
        Self::with_engine()
    }

    /// Build a tagger from deserialized settings.
    pub fn from_config(config: TaggerConfig) -> Result<Self> {
        Self::from_config_with_engine(config)
    }
}

impl Default for Tagger<DefaultTfIdfEngine> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration
impl<E> Tagger<E>
where
    E: TfIdfEngine,
{
    /// English tagger using engine `E`.
    pub fn with_engine() -> Self {
        let indonesian = Arc::new(Vocabulary::new());
        Self {
            profile: LanguageProfile::new(Language::English, &indonesian),
            indonesian,
            workers: None,
            boost_policy: BoostPolicy::default(),
            _marker: PhantomData,
        }
    }

    pub fn from_config_with_engine(config: TaggerConfig) -> Result<Self> {
        config.validate()?;
        let mut tagger = Self::with_engine()
            .with_boost_policy(config.boost_policy)
            .with_vocabulary(Vocabulary::from(config.vocabulary));
        tagger.workers = config.workers;
        tagger.set_language(&config.language)?;
        if let Some(words) = config.stop_words {
            tagger.set_stop_words(words);
        }
        Ok(tagger)
    }

    /// Default worker count for [`Tagger::get_tags`]; `0` means host parallelism.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_boost_policy(mut self, policy: BoostPolicy) -> Self {
        self.boost_policy = policy;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.set_vocabulary(vocabulary);
        self
    }

    /// Select the active language.
    ///
    /// `"en"` and `"id"` load their built-in stop words; `"id"` also turns on
    /// part-of-speech reweighting. Any other code is accepted and leaves an
    /// empty stop-word set without reweighting. Replaces stop words set via
    /// [`Tagger::set_stop_words`]. Never fails.
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        self.profile = LanguageProfile::new(Language::from_code(code), &self.indonesian);
        debug!(
            language = %self.profile.language,
            stop_words = self.profile.stop_words.len(),
            pos = self.profile.vocabulary.is_some(),
            "language selected"
        );
        Ok(())
    }

    /// Replace the active stop words. Matching is exact, supply lowercase words.
    pub fn set_stop_words<I, T>(&mut self, words: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.profile.stop_words = StopWords::from_words(words);
    }

    /// Register the Indonesian part-of-speech table.
    /// Takes effect immediately if `"id"` is active.
    pub fn set_vocabulary(&mut self, vocabulary: Vocabulary) {
        self.indonesian = Arc::new(vocabulary);
        if self.profile.vocabulary.is_some() {
            self.profile.vocabulary = Some(Arc::clone(&self.indonesian));
        }
    }

    pub fn set_boost_policy(&mut self, policy: BoostPolicy) {
        self.boost_policy = policy;
    }

    pub fn language(&self) -> &Language {
        &self.profile.language
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.profile.stop_words
    }

    pub fn boost_policy(&self) -> BoostPolicy {
        self.boost_policy
    }
}

/// Scoring
impl<E> Tagger<E>
where
    E: TfIdfEngine,
{
    /// Top `count` tags of `text`, highest TF-IDF first.
    ///
    /// Uses the worker count set with [`Tagger::with_workers`], or the host's
    /// available parallelism.
    pub fn get_tags(&self, text: &str, count: usize) -> Result<Vec<TermScore>> {
        self.get_tags_with_workers(text, count, self.workers.unwrap_or(0))
    }

    /// Top `count` tags of `text` scored on `workers` threads.
    ///
    /// `workers == 0` uses the host's available parallelism; the count is
    /// further limited to the number of candidate terms. Empty text or
    /// `count == 0` yields an empty list.
    pub fn get_tags_with_workers(&self, text: &str, count: usize, workers: usize) -> Result<Vec<TermScore>> {
        // the dictionary side and the sentence side share nothing
        let (terms, sentences) = rayon::join(
            || self.profile.stop_words.filter(Dictionary::build(text).into_terms()),
            || Sentences::segment(text),
        );
        debug!(
            terms = terms.len(),
            sentences = sentences.len(),
            tokens = sentences.token_sum(),
            "text prepared"
        );
        if terms.is_empty() || count == 0 {
            return Ok(Vec::new());
        }

        let workers = pool::resolve_workers(workers, terms.len());
        let pool = pool::build_pool(workers)?;
        let scores = pool.install(|| {
            let mut scores = tfidf::idf_phase::<E>(&terms, &sentences);
            trace!(workers, "idf phase done");
            tfidf::tfidf_phase::<E>(&mut scores, &sentences);
            trace!(workers, "tf-idf phase done");
            if let Some(vocabulary) = &self.profile.vocabulary {
                pos::reweight_phase(&mut scores, vocabulary, self.boost_policy);
                trace!(workers, policy = ?self.boost_policy, "pos reweight done");
            }
            scores
        });
        Ok(ranking::rank(scores, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::pos::PosCategory;

    const CATS: &str = "The cat sat. The cat ran. The dog slept.";

    fn terms(tags: &[TermScore]) -> Vec<&str> {
        tags.iter().map(|t| t.term.as_str()).collect()
    }

    #[test]
    fn english_example() {
        let tagger = Tagger::new();
        let tags = tagger.get_tags(CATS, 10).unwrap();
        let mut found = terms(&tags);
        found.sort_unstable();
        assert_eq!(found, vec!["cat", "dog", "ran", "sat", "slept"]);

        let cat = tags.iter().find(|t| t.term == "cat").unwrap();
        let dog = tags.iter().find(|t| t.term == "dog").unwrap();
        assert!(cat.idf < dog.idf);
        // 9 tokens in total, "the" included
        assert!((dog.tf - 1.0 / 9.0).abs() < 1e-12);
        assert!((cat.tf - 2.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn count_limits_result() {
        let tagger = Tagger::new();
        assert_eq!(tagger.get_tags(CATS, 2).unwrap().len(), 2);
        assert!(tagger.get_tags(CATS, 0).unwrap().is_empty());
        assert!(tagger.get_tags("", 5).unwrap().is_empty());
        assert_eq!(tagger.get_tags(CATS, 100).unwrap().len(), 5);
    }

    #[test]
    fn unsupported_language_keeps_every_term() {
        let mut tagger = Tagger::new();
        tagger.set_language("us").unwrap();
        assert_eq!(tagger.language(), &Language::Unsupported("us".into()));
        let tags = tagger.get_tags(CATS, 10).unwrap();
        assert!(terms(&tags).contains(&"the"));
        assert_eq!(tags.len(), 6);
    }

    #[test]
    fn custom_stop_words_replace_language_list() {
        let mut tagger = Tagger::new();
        tagger.set_stop_words(["cat", "the"]);
        let tags = tagger.get_tags(CATS, 10).unwrap();
        assert!(!terms(&tags).contains(&"cat"));
        assert_eq!(tags.len(), 4);

        // switching language restores the built-in list
        tagger.set_language("en").unwrap();
        assert_eq!(tagger.get_tags(CATS, 10).unwrap().len(), 5);
    }

    #[test]
    fn vocabulary_follows_language() {
        let mut vocab = Vocabulary::new();
        vocab.insert("kucing", PosCategory::Noun);
        let mut tagger = Tagger::new().with_vocabulary(vocab);
        let text = "kucing tidur. anjing lari.";

        let plain = tagger.get_tags(text, 10).unwrap();
        tagger.set_language("id").unwrap();
        let boosted = tagger.get_tags(text, 10).unwrap();
        tagger.set_language("en").unwrap();
        let plain_again = tagger.get_tags(text, 10).unwrap();

        let tfidf = |tags: &[TermScore], term: &str| tags.iter().find(|t| t.term == term).unwrap().tfidf;
        // compounding noun boost: (1 + 3.0)^4
        assert!((tfidf(&boosted, "kucing") - tfidf(&plain, "kucing") * 256.0).abs() < 1e-9);
        // absent from the table: one proper-noun boost
        assert!((tfidf(&boosted, "anjing") - tfidf(&plain, "anjing") * 4.5).abs() < 1e-9);
        // all four terms tie, so only the multiset is stable across calls
        let pairs = |tags: &[TermScore]| {
            let mut pairs: Vec<(String, u64)> = tags.iter().map(|t| (t.term.clone(), t.tfidf.to_bits())).collect();
            pairs.sort();
            pairs
        };
        assert_eq!(pairs(&plain), pairs(&plain_again));
    }

    #[test]
    fn set_vocabulary_while_indonesian_active() {
        let mut tagger = Tagger::new().with_boost_policy(BoostPolicy::Single);
        tagger.set_language("id").unwrap();
        let before = tagger.get_tags("makan nasi", 5).unwrap();

        let mut vocab = Vocabulary::new();
        vocab.insert("makan", PosCategory::Verb);
        tagger.set_vocabulary(vocab);
        let after = tagger.get_tags("makan nasi", 5).unwrap();

        let tfidf = |tags: &[TermScore], term: &str| tags.iter().find(|t| t.term == term).unwrap().tfidf;
        // single sentence: idf = ln(2 / 1)
        assert!((tfidf(&before, "makan") - tfidf(&before, "nasi")).abs() < 1e-12);
        assert!(tfidf(&after, "makan") < tfidf(&after, "nasi"));
        assert_eq!(tagger.boost_policy(), BoostPolicy::Single);
    }

    #[test]
    fn worker_counts_agree() {
        let tagger = Tagger::new();
        let text = "Rust is fast. Rust is safe! Memory safety without garbage collection? Fearless concurrency.";
        let reference = tagger.get_tags_with_workers(text, 20, 1).unwrap();
        for workers in [0, 2, 3, 64] {
            let tags = tagger.get_tags_with_workers(text, 20, workers).unwrap();
            let mut left: Vec<(String, u64)> = tags.iter().map(|t| (t.term.clone(), t.tfidf.to_bits())).collect();
            let mut right: Vec<(String, u64)> = reference.iter().map(|t| (t.term.clone(), t.tfidf.to_bits())).collect();
            left.sort();
            right.sort();
            assert_eq!(left, right, "workers = {workers}");
        }
    }

    #[test]
    fn from_config() {
        let config: TaggerConfig = serde_json::from_str(
            r#"{"language": "id", "workers": 2, "stop_words": ["nasi"],
                "vocabulary": [{"id": 1, "word": "makan", "type": "verba"}]}"#,
        )
        .unwrap();
        let tagger = Tagger::from_config(config).unwrap();
        assert_eq!(tagger.language(), &Language::Indonesian);
        assert!(tagger.stop_words().contains("nasi"));
        assert!(!tagger.stop_words().contains("yang"));
        let tags = tagger.get_tags("makan nasi goreng", 5).unwrap();
        assert_eq!(terms(&tags).len(), 2);
    }

    #[test]
    fn boost_policy_switches_between_calls() {
        let mut vocab = Vocabulary::new();
        vocab.insert("kucing", PosCategory::Noun);
        let mut tagger = Tagger::new().with_vocabulary(vocab);
        tagger.set_language("id").unwrap();
        let text = "kucing tidur. anjing lari.";

        let tfidf = |tags: &[TermScore], term: &str| tags.iter().find(|t| t.term == term).unwrap().tfidf;
        let compounding = tagger.get_tags(text, 10).unwrap();
        tagger.set_boost_policy(BoostPolicy::Single);
        assert_eq!(tagger.boost_policy(), BoostPolicy::Single);
        let single = tagger.get_tags(text, 10).unwrap();

        // (1 + 3.0)^4 against (1 + 3.0)
        assert!((tfidf(&compounding, "kucing") - tfidf(&single, "kucing") * 64.0).abs() < 1e-9);
        assert!((tfidf(&compounding, "anjing") - tfidf(&single, "anjing")).abs() < 1e-12);
    }
}
