use std::{sync::Arc, thread};

use tf_idf_tagger::{
    sanitize_word, BoostPolicy, Dictionary, PosCategory, Sentences, TagError, Tagger, TaggerConfig, TermScore, VocabEntry,
    Vocabulary,
};

const ENGLISH: &str = "Rust is a systems programming language focused on safety, speed, and concurrency. \
Rust achieves memory safety without garbage collection. The borrow checker validates references at compile time! \
Cargo is the Rust package manager. Cargo downloads crates, compiles crates, and runs tests. \
In 2015, Rust 1.0 shipped. Is the borrow checker strict? The borrow checker is strict.";

const INDONESIAN: &str = "Presiden meresmikan jembatan baru di Surabaya. \
Jembatan tersebut menghubungkan dua kota besar. Warga Surabaya menyambut jembatan itu dengan gembira. \
Pembangunan jembatan memakan waktu tiga tahun.";

fn pairs(tags: &[TermScore]) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = tags.iter().map(|t| (t.term.clone(), t.tfidf.to_bits())).collect();
    pairs.sort();
    pairs
}

fn assert_descending(tags: &[TermScore]) {
    for pair in tags.windows(2) {
        assert!(pair[0].tfidf >= pair[1].tfidf, "{} before {}", pair[0], pair[1]);
    }
}

#[test]
fn tf_in_unit_range_and_sorted() {
    let tagger = Tagger::new();
    for text in [ENGLISH, INDONESIAN, "one. two two. three three three!", "a"] {
        let tags = tagger.get_tags(text, 50).unwrap();
        assert_descending(&tags);
        for tag in &tags {
            assert!((0.0..=1.0).contains(&tag.tf), "{tag:#}");
            assert!(tag.tfidf.is_finite());
        }
    }
}

#[test]
fn length_is_min_of_count_and_candidates() {
    let tagger = Tagger::new();
    let all = tagger.get_tags(ENGLISH, usize::MAX).unwrap();
    assert!(!all.is_empty());
    for count in [0, 1, 3, all.len(), all.len() + 10] {
        assert_eq!(tagger.get_tags(ENGLISH, count).unwrap().len(), count.min(all.len()));
    }
}

#[test]
fn top_tags_of_english_text() {
    let tagger = Tagger::new();
    let tags = tagger.get_tags(ENGLISH, 50).unwrap();
    let terms: Vec<&str> = tags.iter().map(|t| t.term.as_str()).collect();
    assert!(terms.contains(&"rust"));
    assert!(terms.contains(&"cargo"));
    assert!(terms.contains(&"borrow"));
    assert!(!terms.contains(&"the"));
    assert!(!terms.contains(&"is"));
}

#[test]
fn numeric_tokens_never_tagged() {
    let mut tagger = Tagger::new();
    tagger.set_language("none").unwrap();
    let tags = tagger.get_tags("In 2024 we shipped 1-2-3 releases. Version 10 was 3.5 times faster!", 100).unwrap();
    for tag in &tags {
        assert!(tag.term.chars().any(char::is_alphabetic), "numeric term {:?}", tag.term);
        assert_eq!(sanitize_word(&tag.term), tag.term);
    }
}

#[test]
fn every_dictionary_term_occurs_in_a_sentence() {
    let texts = [
        "a.-b c",
        "x -y. -z!",
        "foo-.bar 3.5x",
        "über-.-x? ß--1. 1-a",
        "a-. b",
        "x² a½b. e.g. well-known?",
        ENGLISH,
        INDONESIAN,
    ];
    for text in texts {
        let dictionary = Dictionary::build(text);
        let sentences = Sentences::segment(text);
        for term in dictionary.iter() {
            assert!(sentences.doc_freq(term) >= 1, "{term:?} missing from sentences of {text:?}");
            assert!(sentences.term_count(term) >= 1);
        }
    }
}

#[test]
fn empty_or_punctuation_only_text() {
    let tagger = Tagger::new();
    for text in ["", "   ", "?!... --- ,,,", "2024 1-2-3"] {
        for count in [0, 1, 10] {
            assert!(tagger.get_tags(text, count).unwrap().is_empty(), "{text:?}");
        }
    }
}

// terms that tie on tfidf come out of an unordered set, so their relative
// order may differ between calls; the (term, tfidf) multiset must not
#[test]
fn repeated_calls_agree_as_multisets() {
    let tagger = Tagger::new();
    let first = tagger.get_tags(ENGLISH, 100).unwrap();
    for _ in 0..5 {
        let again = tagger.get_tags(ENGLISH, 100).unwrap();
        assert_eq!(pairs(&again), pairs(&first));
    }
}

#[test]
fn indonesian_reweighting_switches_with_language() {
    let vocabulary: Vocabulary = vec![
        VocabEntry { id: 1, word: "jembatan".into(), category: PosCategory::Noun },
        VocabEntry { id: 2, word: "meresmikan".into(), category: PosCategory::Verb },
        VocabEntry { id: 3, word: "gembira".into(), category: PosCategory::Adjective },
    ]
    .into();
    let mut tagger = Tagger::new().with_vocabulary(vocabulary);

    tagger.set_language("id").unwrap();
    let id_tags = tagger.get_tags(INDONESIAN, 100).unwrap();
    tagger.set_language("en").unwrap();
    let en_tags = tagger.get_tags(INDONESIAN, 100).unwrap();

    let score = |tags: &[TermScore], term: &str| tags.iter().find(|t| t.term == term).map(|t| (t.tf, t.idf, t.tfidf));
    let (tf_id, idf_id, boosted) = score(&id_tags, "jembatan").unwrap();
    let (tf_en, idf_en, plain) = score(&en_tags, "jembatan").unwrap();
    assert_eq!((tf_id, idf_id), (tf_en, idf_en));
    assert!((boosted - plain * 256.0).abs() < 1e-9);
    assert_ne!(pairs(&id_tags), pairs(&en_tags));

    // "yang"/"dengan" style function words are gone in Indonesian mode
    assert!(id_tags.iter().all(|t| t.term != "dengan" && t.term != "di"));
    assert_descending(&id_tags);
    assert_eq!(id_tags[0].term, "jembatan");
}

#[test]
fn single_policy_is_milder_than_compounding() {
    let mut vocabulary = Vocabulary::new();
    vocabulary.insert("jembatan", PosCategory::Noun);
    let mut compounding = Tagger::new().with_vocabulary(vocabulary.clone());
    let mut single = Tagger::new().with_vocabulary(vocabulary).with_boost_policy(BoostPolicy::Single);
    compounding.set_language("id").unwrap();
    single.set_language("id").unwrap();

    let find = |tags: Vec<TermScore>| tags.into_iter().find(|t| t.term == "jembatan").unwrap();
    let c = find(compounding.get_tags(INDONESIAN, 100).unwrap());
    let s = find(single.get_tags(INDONESIAN, 100).unwrap());
    assert!((c.tfidf - s.tfidf * 64.0).abs() < 1e-9);
}

#[test]
fn independent_taggers_across_threads() {
    let english = Arc::new(Tagger::new());
    let mut indonesian = Tagger::new();
    indonesian.set_language("id").unwrap();
    let indonesian = Arc::new(indonesian);

    let expected_en = pairs(&english.get_tags(ENGLISH, 20).unwrap());
    let expected_id = pairs(&indonesian.get_tags(INDONESIAN, 20).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let english = Arc::clone(&english);
            let indonesian = Arc::clone(&indonesian);
            thread::spawn(move || {
                let workers = i + 1;
                (
                    pairs(&english.get_tags_with_workers(ENGLISH, 20, workers).unwrap()),
                    pairs(&indonesian.get_tags_with_workers(INDONESIAN, 20, workers).unwrap()),
                )
            })
        })
        .collect();
    for handle in handles {
        let (en, id) = handle.join().unwrap();
        assert_eq!(en, expected_en);
        assert_eq!(id, expected_id);
    }
}

#[test]
fn config_round_trip() {
    let config = TaggerConfig {
        language: "id".into(),
        workers: Some(2),
        boost_policy: BoostPolicy::Single,
        stop_words: None,
        vocabulary: vec![VocabEntry { id: 1, word: "jembatan".into(), category: PosCategory::Noun }],
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: TaggerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let tagger = Tagger::from_config(parsed).unwrap();
    assert_eq!(tagger.language().code(), "id");
    assert!(!tagger.get_tags(INDONESIAN, 5).unwrap().is_empty());
}

#[test]
fn invalid_config_is_an_error() {
    let config = TaggerConfig { language: String::new(), ..TaggerConfig::default() };
    assert!(matches!(Tagger::from_config(config), Err(TagError::InvalidConfig(_))));
}
