use std::{fmt, sync::Arc};

use crate::tagger::{pos::Vocabulary, stopword::StopWords};

/// Language selected on a tagger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// `"en"`: English stop words, no part-of-speech reweighting
    #[default]
    English,
    /// `"id"`: Indonesian stop words and part-of-speech reweighting
    Indonesian,
    /// Any other code: no stop words, no reweighting
    Unsupported(String),
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::English,
            "id" => Language::Indonesian,
            other => Language::Unsupported(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
            Language::Unsupported(code) => code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Active stop words and optional POS table of a tagger.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: Language,
    pub stop_words: StopWords,
    /// Present only when the language is reweighted by part of speech
    pub vocabulary: Option<Arc<Vocabulary>>,
}

impl LanguageProfile {
    /// Profile for `language`, with `indonesian` as the POS table used for `"id"`.
    pub fn new(language: Language, indonesian: &Arc<Vocabulary>) -> Self {
        let (stop_words, vocabulary) = match &language {
            Language::English => (StopWords::english(), None),
            Language::Indonesian => (StopWords::indonesian(), Some(Arc::clone(indonesian))),
            Language::Unsupported(_) => (StopWords::empty(), None),
        };
        Self { language, stop_words, vocabulary }
    }
}
