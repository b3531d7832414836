//! Serializable tagger settings.
//!
//! ```json
//! {
//!   "language": "id",
//!   "workers": 4,
//!   "boost_policy": "compounding",
//!   "stop_words": ["dan", "yang"],
//!   "vocabulary": [{ "id": 1, "word": "rumah", "type": "nomina" }]
//! }
//! ```
//! Every field is optional.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TagError},
    tagger::pos::{BoostPolicy, VocabEntry},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Language code, `"en"` or `"id"`; other codes disable stop words.
    pub language: String,
    /// Worker threads per call. `None` or `0` uses the host's parallelism.
    pub workers: Option<usize>,
    pub boost_policy: BoostPolicy,
    /// Replaces the language's built-in stop words when set.
    pub stop_words: Option<Vec<String>>,
    /// Indonesian part-of-speech table.
    pub vocabulary: Vec<VocabEntry>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            workers: None,
            boost_policy: BoostPolicy::default(),
            stop_words: None,
            vocabulary: Vec::new(),
        }
    }
}

impl TaggerConfig {
    /// Reject settings that cannot describe a tagger.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(TagError::InvalidConfig("language code is empty".to_string()));
        }
        Ok(())
    }
}
