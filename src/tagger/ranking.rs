use crate::tagger::term::TermScore;

/// Sort scores by descending TF-IDF and keep the first `count`.
///
/// The sort is stable: equal scores keep their incoming order. NaN scores
/// are dropped. `count` larger than the list returns everything.
pub fn rank(mut scores: Vec<TermScore>, count: usize) -> Vec<TermScore> {
    if count == 0 {
        return Vec::new();
    }
    scores.retain(|s| !s.tfidf.is_nan());
    scores.sort_by(|a, b| b.tfidf.total_cmp(&a.tfidf));
    scores.truncate(count);
    scores
}
