//! End-to-end scenarios for the sentiment scorer.

use polarity::{SentimentIntensityAnalyzer, SentimentScores};
use pretty_assertions::assert_eq;

fn analyzer() -> SentimentIntensityAnalyzer {
    SentimentIntensityAnalyzer::new().expect("embedded lexicon must load")
}

fn assert_proportions(scores: &SentimentScores) {
    let sum = scores.neg + scores.neu + scores.pos;
    assert!(
        (sum - 1.0).abs() < 1e-6,
        "proportions must sum to 1.0, got {sum}"
    );
}

#[test]
fn love_scores_strongly_positive() {
    let scores = analyzer().polarity_scores("I love this!");
    assert!(scores.compound > 0.5, "compound was {}", scores.compound);
    assert!(scores.pos > scores.neg);
    assert_proportions(&scores);
}

#[test]
fn hate_scores_strongly_negative() {
    let scores = analyzer().polarity_scores("I hate this.");
    assert!(scores.compound < -0.5, "compound was {}", scores.compound);
    assert!(scores.neg > scores.pos);
    assert_proportions(&scores);
}

#[test]
fn empty_input_is_fully_neutral() {
    let scores = analyzer().polarity_scores("");
    assert_eq!(scores, SentimentScores::neutral());
    assert_proportions(&scores);
}

#[test]
fn factual_statement_is_neutral() {
    let scores = analyzer().polarity_scores("This is a table.");
    assert_eq!(scores.compound, 0.0);
    assert!(scores.neu > 0.99);
    assert_proportions(&scores);
}

#[test]
fn negation_flips_polarity() {
    let a = analyzer();
    assert!(a.polarity_scores("not good").compound < a.polarity_scores("good").compound);
}

#[test]
fn intensifier_strengthens_polarity() {
    let a = analyzer();
    assert!(a.polarity_scores("very good").compound > a.polarity_scores("good").compound);

    // Boosters track the direction of the word they modify.
    assert!(a.polarity_scores("very bad").compound < a.polarity_scores("bad").compound);
}

#[test]
fn punctuation_and_caps_amplify() {
    let a = analyzer();
    let base = a.polarity_scores("the movie was great").compound;
    let exclaimed = a.polarity_scores("the movie was great!!").compound;
    let shouted = a.polarity_scores("the movie was GREAT!!").compound;
    assert!(exclaimed > base);
    assert!(shouted > exclaimed);
}

#[test]
fn mixed_clauses_follow_the_but() {
    let a = analyzer();
    let scores = a.polarity_scores("The acting was wonderful but the plot was a disaster");
    assert!(scores.compound < 0.0, "compound was {}", scores.compound);
    assert!(scores.neg > scores.pos);
}

#[test]
fn repeated_scoring_is_deterministic() {
    let a = analyzer();
    let text = "Not bad at all, really quite good, but the ending was TERRIBLE!!";
    let first = a.polarity_scores(text);
    for _ in 0..10 {
        assert_eq!(a.polarity_scores(text), first);
    }
}

#[test]
fn custom_lexicon_drives_scoring() {
    let lexicon = polarity::Lexicon::parse("flurb\t3.0\nblarg\t-3.0\n").unwrap();
    let a = SentimentIntensityAnalyzer::with_lexicon(lexicon);
    assert!(a.polarity_scores("what a flurb day").compound > 0.0);
    assert!(a.polarity_scores("what a blarg day").compound < 0.0);
    // Words from the embedded lexicon mean nothing here.
    assert_eq!(a.polarity_scores("wonderful").compound, 0.0);
}
