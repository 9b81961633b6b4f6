//! Static modifier tables: negations, boosters, and multi-word special
//! cases.
//!
//! These are part of the scoring model rather than the lexicon proper:
//! none of these tokens carries sentiment of its own; they adjust the
//! valence of nearby lexicon words.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Valence delta contributed by an amplifying booster ("very", "extremely").
pub const BOOST_INCR: f64 = 0.293;

/// Valence delta contributed by a dampening booster ("barely", "slightly").
pub const BOOST_DECR: f64 = -0.293;

/// Tokens that negate a following sentiment word.
///
/// Contractions appear both with and without the apostrophe since
/// tokenization keeps embedded punctuation.
pub static NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "darent", "daren't", "despite", "didnt", "didn't", "doesnt", "doesn't", "dont", "don't",
    "hadnt", "hadn't", "hasnt", "hasn't", "havent", "haven't", "isnt", "isn't", "mightnt",
    "mightn't", "mustnt", "mustn't", "neednt", "needn't", "neither", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "oughtn't", "rarely", "seldom", "shant",
    "shan't", "shouldnt", "shouldn't", "uhuh", "uh-uh", "wasnt", "wasn't", "werent", "weren't",
    "without", "wont", "won't", "wouldnt", "wouldn't",
];

/// Booster and dampener words mapped to their valence delta.
pub static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for word in [
        "absolutely",
        "amazingly",
        "awfully",
        "completely",
        "considerably",
        "decidedly",
        "deeply",
        "effing",
        "enormously",
        "entirely",
        "especially",
        "exceptionally",
        "extremely",
        "fabulously",
        "flippin",
        "flipping",
        "frickin",
        "fricking",
        "friggin",
        "frigging",
        "fully",
        "fucking",
        "greatly",
        "hella",
        "highly",
        "hugely",
        "incredibly",
        "intensely",
        "majorly",
        "more",
        "most",
        "particularly",
        "purely",
        "quite",
        "really",
        "remarkably",
        "so",
        "substantially",
        "thoroughly",
        "totally",
        "tremendously",
        "uber",
        "unbelievably",
        "unusually",
        "utterly",
        "very",
    ] {
        map.insert(word, BOOST_INCR);
    }

    for word in [
        "almost",
        "barely",
        "hardly",
        "kind-of",
        "kinda",
        "kindof",
        "less",
        "little",
        "marginally",
        "occasionally",
        "partly",
        "scarcely",
        "slightly",
        "somewhat",
        "sort-of",
        "sorta",
        "sortof",
    ] {
        map.insert(word, BOOST_DECR);
    }

    map
});

/// Dampening bigrams, matched against n-grams around a sentiment word.
pub static MULTIWORD_BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("kind of", BOOST_DECR),
        ("sort of", BOOST_DECR),
        ("just enough", BOOST_DECR),
    ])
});

/// Multi-word expressions whose sentiment differs from their parts.
///
/// When one of these phrases surrounds a sentiment word, the phrase
/// valence replaces the word's computed valence outright.
pub static SPECIAL_CASES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("badass", 1.5),
        ("bus stop", 0.0),
        ("yeah right", -2.0),
        ("kiss of death", -1.5),
        ("to die for", 3.0),
        ("beating heart", 3.1),
        ("broken heart", -2.9),
    ])
});

/// True when the token (already lowercased) negates a following word.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

/// Booster delta for a lowercased token, zero when it is not a booster.
pub fn booster_delta(word: &str) -> f64 {
    BOOSTERS.get(word).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contractions_negate_with_and_without_apostrophe() {
        assert!(is_negation("don't"));
        assert!(is_negation("dont"));
        assert!(is_negation("never"));
        assert!(!is_negation("do"));
    }

    #[test]
    fn unknown_words_have_no_boost() {
        assert_eq!(booster_delta("table"), 0.0);
        assert_eq!(booster_delta("very"), BOOST_INCR);
        assert_eq!(booster_delta("barely"), BOOST_DECR);
    }
}
