use std::fmt;

use serde::{Deserialize, Serialize};

/// Score of one candidate tag.
///
/// `idf` and `tf` are fixed once computed; `tfidf` starts as `tf * idf` and
/// may be raised afterwards by part-of-speech reweighting.
///
/// # Examples
/// ```
/// use tf_idf_tagger::TermScore;
/// let score = TermScore::new("rust");
/// assert_eq!(score.term, "rust");
/// assert_eq!(score.tfidf, 0.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TermScore {
    pub term: String,
    /// `ln(total tokens / sentences containing the term)`
    pub idf: f64,
    /// occurrences / total tokens, in `[0, 1]`
    pub tf: f64,
    pub tfidf: f64,
}

impl TermScore {
    /// Unscored entry for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        TermScore {
            term: term.into(),
            idf: 0.0,
            tf: 0.0,
            tfidf: 0.0,
        }
    }
}

impl fmt::Display for TermScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} (tf: {:.6}, idf: {:.6}, tfidf: {:.6})", self.term, self.tf, self.idf, self.tfidf)
        } else {
            write!(f, "{}\t{:.6}", self.term, self.tfidf)
        }
    }
}
