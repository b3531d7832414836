use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tagger::term::TermScore;

/// Part-of-speech category of a vocabulary entry.
///
/// Serialized with the Indonesian tag labels (`nama`, `nomina`, `verba`,
/// ...). Any other label is kept as [`PosCategory::Unknown`] and carries no
/// boost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum PosCategory {
    /// `nama`
    ProperNoun,
    /// `nomina`
    Noun,
    /// `verba`
    Verb,
    /// `adjektiva`
    Adjective,
    /// `adverbia`
    Adverb,
    /// `numeralia`
    Numeral,
    /// `pronomina`
    Pronoun,
    /// `interjeksi`
    Interjection,
    /// `preposisi`
    Preposition,
    /// `lain-lain`
    Other,
    Unknown(String),
}

/// Categories that never receive their own boost under [`BoostPolicy::Single`]
/// and that gate the four compounding steps under [`BoostPolicy::Compounding`].
const EXCLUDED: [PosCategory; 4] = [
    PosCategory::Other,
    PosCategory::Pronoun,
    PosCategory::Interjection,
    PosCategory::Preposition,
];

impl PosCategory {
    /// Tag label as found in vocabulary data.
    pub fn label(&self) -> &str {
        match self {
            PosCategory::ProperNoun => "nama",
            PosCategory::Noun => "nomina",
            PosCategory::Verb => "verba",
            PosCategory::Adjective => "adjektiva",
            PosCategory::Adverb => "adverbia",
            PosCategory::Numeral => "numeralia",
            PosCategory::Pronoun => "pronomina",
            PosCategory::Interjection => "interjeksi",
            PosCategory::Preposition => "preposisi",
            PosCategory::Other => "lain-lain",
            PosCategory::Unknown(label) => label,
        }
    }

    /// Parse a tag label. Unrecognized labels become `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "nama" => PosCategory::ProperNoun,
            "nomina" => PosCategory::Noun,
            "verba" => PosCategory::Verb,
            "adjektiva" => PosCategory::Adjective,
            "adverbia" => PosCategory::Adverb,
            "numeralia" => PosCategory::Numeral,
            "pronomina" => PosCategory::Pronoun,
            "interjeksi" => PosCategory::Interjection,
            "preposisi" => PosCategory::Preposition,
            "lain-lain" => PosCategory::Other,
            other => PosCategory::Unknown(other.to_string()),
        }
    }

    /// Multiplicative boost for this category: `tfidf += tfidf * modifier`.
    pub fn modifier(&self) -> f64 {
        match self {
            PosCategory::ProperNoun => 3.5,
            PosCategory::Noun => 3.0,
            PosCategory::Verb => 2.0,
            PosCategory::Adjective => 1.0,
            PosCategory::Adverb => 0.25,
            PosCategory::Numeral => 0.5,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn is_excluded(&self) -> bool {
        EXCLUDED.contains(self)
    }
}

impl From<String> for PosCategory {
    fn from(label: String) -> Self {
        PosCategory::from_label(&label)
    }
}

impl From<PosCategory> for String {
    fn from(category: PosCategory) -> Self {
        match category {
            PosCategory::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// One row of a part-of-speech dictionary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VocabEntry {
    #[serde(default)]
    pub id: u32,
    pub word: String,
    #[serde(rename = "type")]
    pub category: PosCategory,
}

/// Word → category lookup table.
///
/// Keeps insertion order. A word inserted twice keeps its first position
/// and takes the later category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    entries: IndexMap<String, PosCategory>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, category: PosCategory) -> &mut Self {
        self.entries.insert(word.into(), category);
        self
    }

    /// Exact-match lookup.
    #[inline]
    pub fn category(&self, word: &str) -> Option<&PosCategory> {
        self.entries.get(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PosCategory)> {
        self.entries.iter().map(|(word, category)| (word.as_str(), category))
    }
}

impl FromIterator<VocabEntry> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = VocabEntry>>(iter: I) -> Self {
        let mut vocab = Vocabulary::new();
        for entry in iter {
            vocab.insert(entry.word, entry.category);
        }
        vocab
    }
}

impl From<Vec<VocabEntry>> for Vocabulary {
    fn from(entries: Vec<VocabEntry>) -> Self {
        entries.into_iter().collect()
    }
}

/// How a matched vocabulary category is applied to a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoostPolicy {
    /// One boost per excluded category the term's category differs from.
    /// A noun, verb, etc. is therefore boosted four times, each step on top
    /// of the previous one. This reproduces the historical scoring.
    #[default]
    Compounding,
    /// At most one boost per term.
    Single,
}

/// Apply the part-of-speech boost to one score.
///
/// Terms missing from `vocab` are treated as proper nouns and boosted once.
pub fn reweight(score: &mut TermScore, vocab: &Vocabulary, policy: BoostPolicy) {
    let Some(category) = vocab.category(&score.term) else {
        score.tfidf += score.tfidf * PosCategory::ProperNoun.modifier();
        return;
    };
    let modifier = category.modifier();
    match policy {
        BoostPolicy::Compounding => {
            for excluded in &EXCLUDED {
                if category != excluded {
                    score.tfidf += score.tfidf * modifier;
                }
            }
        }
        BoostPolicy::Single => {
            if !category.is_excluded() {
                score.tfidf += score.tfidf * modifier;
            }
        }
    }
}

/// Reweight every score in parallel on the current rayon pool.
/// Each worker touches only its own slot.
pub(crate) fn reweight_phase(scores: &mut [TermScore], vocab: &Vocabulary, policy: BoostPolicy) {
    scores
        .par_iter_mut()
        .for_each(|score| reweight(score, vocab, policy));
}
