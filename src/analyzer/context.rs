//! Contextual scoring rules applied around sentiment-bearing tokens.
//!
//! A sentiment word's base intensity is adjusted by what surrounds it:
//! boosters within three tokens, negations within three tokens, a
//! preceding "least", contrastive "but", and trailing punctuation
//! emphasis. All rules operate on the lowercase token stream produced
//! by [`super::tokenize`].

use crate::lexicon::modifiers::{self, MULTIWORD_BOOSTERS, SPECIAL_CASES};

use super::tokenize::is_all_caps;

/// Emphasis added to an ALL-CAPS sentiment word in mixed-case text.
pub const CAPS_EMPHASIS: f64 = 0.733;

/// Factor applied to a negated sentiment word: flips sign and dampens.
pub const NEGATION_SCALAR: f64 = -0.74;

/// Amplification for the "never so ..." / "never this ..." pattern,
/// which intensifies rather than negates.
const NEVER_INTENSIFIER: f64 = 1.25;

/// Booster influence decays with distance from the sentiment word.
const DISTANCE_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// Normalization constant: raw sums approach +/-1 with diminishing
/// returns, hitting ~0.5 around a single strong sentiment word.
const NORMALIZE_ALPHA: f64 = 15.0;

/// Per-exclamation-point emphasis, capped at four.
const EXCLAMATION_BOOST: f64 = 0.292;

/// Per-question-mark emphasis for 2-3 marks; flat cap beyond that.
const QUESTION_BOOST: f64 = 0.18;
const QUESTION_BOOST_CAP: f64 = 0.96;

/// Booster contribution of `word` toward a sentiment word with the
/// given valence, scaled for distance damping by the caller.
pub fn booster_scalar(word: &str, word_lower: &str, valence: f64, mixed_caps: bool) -> f64 {
    let mut scalar = modifiers::booster_delta(word_lower);
    if scalar == 0.0 {
        return 0.0;
    }
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_all_caps(word) && mixed_caps {
        scalar += if valence > 0.0 {
            CAPS_EMPHASIS
        } else {
            -CAPS_EMPHASIS
        };
    }
    scalar
}

/// Damping factor for a booster `distance` tokens before the target
/// (0 = adjacent).
pub fn distance_damping(distance: usize) -> f64 {
    DISTANCE_DAMPING[distance]
}

/// Apply negation if the token `distance + 1` positions before the
/// sentiment word at `i` negates it.
///
/// "never so"/"never this" amplifies instead of negating, and
/// "without doubt" is exempt.
pub fn negation_check(valence: f64, words_lower: &[String], distance: usize, i: usize) -> f64 {
    let w = |idx: usize| words_lower[idx].as_str();

    match distance {
        0 => {
            if modifiers::is_negation(w(i - 1)) {
                return valence * NEGATION_SCALAR;
            }
        }
        1 => {
            if w(i - 2) == "never" && (w(i - 1) == "so" || w(i - 1) == "this") {
                return valence * NEVER_INTENSIFIER;
            }
            if w(i - 2) == "without" && w(i - 1) == "doubt" {
                return valence;
            }
            if modifiers::is_negation(w(i - 2)) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            if w(i - 3) == "never"
                && (w(i - 2) == "so" || w(i - 2) == "this" || w(i - 1) == "so" || w(i - 1) == "this")
            {
                return valence * NEVER_INTENSIFIER;
            }
            if w(i - 3) == "without" && (w(i - 2) == "doubt" || w(i - 1) == "doubt") {
                return valence;
            }
            if modifiers::is_negation(w(i - 3)) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {}
    }

    valence
}

/// A preceding "least" negates ("least useful"), except in the idioms
/// "at least" and "very least".
pub fn least_check(valence: f64, words_lower: &[String], i: usize) -> f64 {
    if i == 0 || words_lower[i - 1] != "least" {
        return valence;
    }
    if i >= 2 {
        let before = words_lower[i - 2].as_str();
        if before == "at" || before == "very" {
            return valence;
        }
    }
    valence * NEGATION_SCALAR
}

/// Check the n-grams surrounding position `i` against the multi-word
/// special cases; a hit replaces the computed valence. Dampening
/// bigrams ("kind of") shift it instead.
pub fn special_case_check(valence: f64, words_lower: &[String], i: usize) -> f64 {
    debug_assert!(i >= 3);

    let gram = |range: std::ops::RangeInclusive<usize>| -> String {
        words_lower[range].join(" ")
    };

    let one_zero = gram(i - 1..=i);
    let two_one_zero = gram(i - 2..=i);
    let two_one = gram(i - 2..=i - 1);
    let three_two_one = gram(i - 3..=i - 1);
    let three_two = gram(i - 3..=i - 2);

    let mut valence = valence;

    for seq in [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two] {
        if let Some(&v) = SPECIAL_CASES.get(seq.as_str()) {
            valence = v;
            break;
        }
    }

    if words_lower.len() - 1 > i {
        let zero_one = gram(i..=i + 1);
        if let Some(&v) = SPECIAL_CASES.get(zero_one.as_str()) {
            valence = v;
        }
    }
    if words_lower.len() - 1 > i + 1 {
        let zero_one_two = gram(i..=i + 2);
        if let Some(&v) = SPECIAL_CASES.get(zero_one_two.as_str()) {
            valence = v;
        }
    }

    for n_gram in [&three_two_one, &three_two, &two_one] {
        if let Some(&delta) = MULTIWORD_BOOSTERS.get(n_gram.as_str()) {
            valence += delta;
        }
    }

    valence
}

/// "but" shifts weight toward the clause after it: sentiments before
/// the conjunction are halved, those after multiplied by 1.5.
pub fn but_check(words_lower: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = words_lower.iter().position(|w| w == "but") else {
        return;
    };

    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_index {
            *sentiment *= 0.5;
        } else if i > but_index {
            *sentiment *= 1.5;
        }
    }
}

/// Emphasis contributed by trailing punctuation in the raw text.
pub fn punctuation_emphasis(text: &str) -> f64 {
    exclamation_emphasis(text) + question_emphasis(text)
}

fn exclamation_emphasis(text: &str) -> f64 {
    let count = text.chars().filter(|&c| c == '!').count().min(4);
    count as f64 * EXCLAMATION_BOOST
}

fn question_emphasis(text: &str) -> f64 {
    let count = text.chars().filter(|&c| c == '?').count();
    if count <= 1 {
        0.0
    } else if count <= 3 {
        count as f64 * QUESTION_BOOST
    } else {
        QUESTION_BOOST_CAP
    }
}

/// Map a raw valence sum to [-1, 1] with diminishing returns.
pub fn normalize_score(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZE_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}
