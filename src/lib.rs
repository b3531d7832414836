//! This crate is an automatic tagging engine using sentence-level TF-IDF.

pub mod data;
pub mod error;
pub mod tagger;
pub mod utils;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagger
/// The top-level struct of this crate. It extracts the most salient terms
/// ("tags") from a single text.
///
/// The pipeline per call:
/// - Build the set of distinct sanitized terms and drop stop words
/// - Split the text into deduplicated sentences (run alongside the step above)
/// - Compute IDF per term, with sentences as documents
/// - Compute TF and TF-IDF per term
/// - Reweight by part of speech (Indonesian only)
/// - Sort by TF-IDF descending and keep the top N
///
/// Scoring phases run on a dedicated rayon pool sized
/// `min(workers, candidate terms)`; every phase finishes before the next
/// one starts.
///
/// # Language
/// Held per instance: `"en"` (default) and `"id"` ship built-in stop words,
/// any other code disables stop words. Independent taggers may use different
/// languages at the same time.
///
/// # Examples
/// ```
/// use tf_idf_tagger::Tagger;
/// let tagger = Tagger::new();
/// let tags = tagger.get_tags("The cat sat. The cat ran. The dog slept.", 2).unwrap();
/// assert_eq!(tags.len(), 2);
/// assert!(tags.iter().all(|t| t.term != "the"));
/// ```
pub use tagger::Tagger;

/// Score of one tag: term, idf, tf and tfidf.
pub use tagger::term::TermScore;

/// Serializable tagger settings, see [`Tagger::from_config`].
pub use tagger::config::TaggerConfig;

/// TF IDF Calculation Engine Trait
/// Defines how IDF and TF are computed from sentence statistics.
/// `DefaultTfIdfEngine` computes `ln(total tokens / sentences containing the term)`
/// and `occurrences / total tokens`, with IDF clamped to 0 for a term found in
/// no sentence.
pub use tagger::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Part-of-speech data and reweighting
/// - `Vocabulary`: word → category table supplied by the caller
/// - `VocabEntry`: one serialized table row (`id`, `word`, `type`)
/// - `PosCategory`: grammatical class with its boost modifier
/// - `BoostPolicy`: compounding (historical) or single boost
pub use tagger::pos::{BoostPolicy, PosCategory, VocabEntry, Vocabulary};

pub use tagger::language::Language;
pub use tagger::stopword::StopWords;
pub use tagger::dictionary::Dictionary;
pub use tagger::sentence::Sentences;

/// The single token normalizer shared by every tokenization pass.
pub use utils::sanitize::sanitize_word;

pub use error::{Result, TagError};
