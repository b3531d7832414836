use rayon::prelude::*;
use tracing::warn;

use crate::tagger::{sentence::Sentences, term::TermScore};

/// TF-IDF calculation engine.
///
/// Plugged into `Tagger<E>`; the default implementation is
/// [`DefaultTfIdfEngine`]. Sentences play the role of documents.
pub trait TfIdfEngine: Send + Sync {
    /// IDF of a term
    /// # Arguments
    /// * `token_sum` - total token count over all sentences
    /// * `doc_freq` - number of sentences containing the term
    fn idf(token_sum: usize, doc_freq: usize) -> f64;

    /// TF of a term
    /// # Arguments
    /// * `count` - raw occurrences of the term
    /// * `token_sum` - total token count over all sentences
    fn tf(count: usize, token_sum: usize) -> f64;
}

/// Sentence-level TF-IDF.
///
/// - idf = `ln(token_sum / doc_freq)`, clamped to `0.0` when `doc_freq` is 0
/// - tf = `count / token_sum`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn idf(token_sum: usize, doc_freq: usize) -> f64 {
        if doc_freq == 0 || token_sum == 0 {
            return 0.0;
        }
        (token_sum as f64 / doc_freq as f64).ln()
    }

    #[inline]
    fn tf(count: usize, token_sum: usize) -> f64 {
        if token_sum == 0 {
            return 0.0;
        }
        count as f64 / token_sum as f64
    }
}

/// Phase A: one entry per term, holding its IDF.
///
/// The output is pre-sized to `terms.len()` and slot `i` belongs to
/// `terms[i]`; each slot is written by exactly one worker.
/// Runs on the current rayon pool.
pub(crate) fn idf_phase<E: TfIdfEngine>(terms: &[String], sentences: &Sentences) -> Vec<TermScore> {
    let token_sum = sentences.token_sum();
    let mut scores: Vec<TermScore> = terms.iter().map(|term| TermScore::new(term.as_str())).collect();
    scores.par_iter_mut().for_each(|score| {
        let doc_freq = sentences.doc_freq(&score.term);
        if doc_freq == 0 {
            warn!(term = %score.term, "term found in no sentence, idf clamped to zero");
        }
        score.idf = E::idf(token_sum, doc_freq);
    });
    scores
}

/// Phase B: TF and TF-IDF for every entry produced by [`idf_phase`].
pub(crate) fn tfidf_phase<E: TfIdfEngine>(scores: &mut [TermScore], sentences: &Sentences) {
    let token_sum = sentences.token_sum();
    scores.par_iter_mut().for_each(|score| {
        score.tf = E::tf(sentences.term_count(&score.term), token_sum);
        score.tfidf = score.tf * score.idf;
    });
}
