//! Lexicon and rule-based sentiment scoring.
//!
//! [`SentimentIntensityAnalyzer`] maps raw text to polarity proportions
//! and a normalized compound score. Scoring is a pure function over the
//! immutable lexicon: no locks, no I/O, no hidden state, so one
//! analyzer can be shared across concurrent request handlers.

pub mod context;
pub mod tokenize;

use serde::{Deserialize, Serialize};

use crate::errors::LexiconError;
use crate::lexicon::{modifiers, Lexicon};

use context::{
    booster_scalar, but_check, distance_damping, least_check, negation_check, normalize_score,
    punctuation_emphasis, special_case_check, CAPS_EMPHASIS,
};
use tokenize::{is_all_caps, tokenize, TokenizedText};

/// Number of preceding tokens scanned for negations and boosters.
const CONTEXT_WINDOW: usize = 3;

/// Polarity scores for one text.
///
/// `neg`, `neu` and `pos` are proportions in [0, 1] that sum to 1.0;
/// `compound` is a normalized aggregate in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Score assigned to text with no scorable tokens: fully neutral.
    pub fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// Rule-based sentiment scorer over an immutable lexicon.
#[derive(Debug, Clone)]
pub struct SentimentIntensityAnalyzer {
    lexicon: Lexicon,
}

impl SentimentIntensityAnalyzer {
    /// Build an analyzer over the lexicon shipped with the crate.
    pub fn new() -> Result<Self, LexiconError> {
        Ok(Self::with_lexicon(Lexicon::embedded()?))
    }

    /// Build an analyzer over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text.
    ///
    /// Empty input, or input with no tokens at all, yields the neutral
    /// score rather than an error; the proportion invariant
    /// `neg + neu + pos == 1.0` holds for every input.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::neutral();
        }

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let lower = tokens.words_lower[i].as_str();

            // Boosters modify their neighbors; they carry no valence of
            // their own. Same for "kind" when it opens "kind of".
            if modifiers::booster_delta(lower) != 0.0 {
                sentiments.push(0.0);
                continue;
            }
            if lower == "kind" && tokens.words_lower.get(i + 1).map(String::as_str) == Some("of") {
                sentiments.push(0.0);
                continue;
            }

            sentiments.push(self.token_valence(&tokens, i));
        }

        but_check(&tokens.words_lower, &mut sentiments);

        score_valence(&sentiments, text)
    }

    /// Base lexicon intensity for the token at `i`, adjusted for
    /// capitalization emphasis and the preceding context window.
    fn token_valence(&self, tokens: &TokenizedText, i: usize) -> f64 {
        let word = tokens.words[i].as_str();
        let lower = tokens.words_lower[i].as_str();

        let Some(base) = self.lexicon.get(lower) else {
            return 0.0;
        };
        let mut valence = base;

        if is_all_caps(word) && tokens.mixed_caps {
            valence += if base > 0.0 {
                CAPS_EMPHASIS
            } else {
                -CAPS_EMPHASIS
            };
        }

        for distance in 0..CONTEXT_WINDOW {
            if i <= distance {
                break;
            }
            let prev = i - distance - 1;
            let prev_lower = tokens.words_lower[prev].as_str();

            // Words that carry their own sentiment are scored on their
            // own turn, not as modifiers of this one.
            if self.lexicon.contains(prev_lower) {
                continue;
            }

            let boost = booster_scalar(
                tokens.words[prev].as_str(),
                prev_lower,
                valence,
                tokens.mixed_caps,
            );
            valence += boost * distance_damping(distance);

            valence = negation_check(valence, &tokens.words_lower, distance, i);

            if distance == 2 {
                valence = special_case_check(valence, &tokens.words_lower, i);
            }
        }

        least_check(valence, &tokens.words_lower, i)
    }
}

/// Fold per-token valences into the final score.
///
/// Positive valences contribute `v + 1` and negative ones `v - 1`, so
/// weak sentiment words still register against the neutral mass;
/// punctuation emphasis accrues to whichever side dominates.
fn score_valence(sentiments: &[f64], text: &str) -> SentimentScores {
    if sentiments.is_empty() {
        return SentimentScores::neutral();
    }

    let punct = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize_score(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    SentimentScores {
        neg: (neg_sum / total).abs(),
        neu: (neu_count / total).abs(),
        pos: (pos_sum / total).abs(),
        compound,
    }
}
