//! # Lexical Sentiment Scorer
//!
//! Turns free feedback text into a label/score/confidence judgment.

use super::lexicon::PolarityLexicon;
use crate::defaults::{NORMALIZATION_DIVISOR, SCORE_MAX, SCORE_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Punctuation stripped before tokenizing, matching the reference
/// tokenizer (apostrophes and hyphens survive so negators like
/// "don't" keep their spelling).
const STRIP_CHARS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"', '~',
    '(', ')',
];

/// Sentiment label classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Raw polarity sum greater than zero
    Positive,
    /// Raw polarity sum less than zero
    Negative,
    /// Raw polarity sum exactly zero
    Neutral,
}

impl SentimentLabel {
    /// Classify a raw polarity sum by its sign
    pub fn from_raw_score(raw_score: i64) -> Self {
        match raw_score.cmp(&0) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        }
    }

    /// Get string representation, matching the stored wire strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a stored label string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sentiment label: {0}")]
pub struct ParseLabelError(pub String);

impl FromStr for SentimentLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(SentimentLabel::Positive),
            "Negative" => Ok(SentimentLabel::Negative),
            "Neutral" => Ok(SentimentLabel::Neutral),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

/// Sentiment judgment for one piece of text
///
/// Created once at feedback-submission time and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentJudgment {
    /// Classified sentiment label
    pub label: SentimentLabel,
    /// Normalized polarity score in [-1, 1]
    pub score: f64,
    /// Magnitude of the score, in [0, 1]
    pub confidence: f64,
}

impl SentimentJudgment {
    /// The fail-safe neutral judgment
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.0,
        }
    }

    /// Build a judgment from a raw integer polarity sum
    pub fn from_raw_score(raw_score: i64) -> Self {
        let score = (raw_score as f64 / NORMALIZATION_DIVISOR).clamp(SCORE_MIN, SCORE_MAX);
        Self {
            label: SentimentLabel::from_raw_score(raw_score),
            score,
            confidence: score.abs(),
        }
    }
}

/// Full analysis result for one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// The label/score/confidence judgment
    pub judgment: SentimentJudgment,
    /// Unnormalized integer polarity sum
    pub raw_score: i64,
    /// Raw score divided by token count (0 for empty text)
    pub comparative: f64,
    /// Tokens that contributed positive weight
    pub positive_terms: Vec<String>,
    /// Tokens that contributed negative weight
    pub negative_terms: Vec<String>,
    /// Number of tokens in the text
    pub token_count: usize,
}

/// Lexical sentiment scorer
///
/// Immutable value holding the polarity lexicon; construct once at
/// process start and share by reference (or `Arc`) into every call
/// site. Scoring is a pure function of the text and the lexicon and
/// never fails: pathological inputs degrade to the neutral judgment.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    /// Polarity lexicon
    lexicon: PolarityLexicon,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Create a scorer with the default lexicon
    pub fn new() -> Self {
        Self {
            lexicon: PolarityLexicon::new(),
        }
    }

    /// Create a scorer over a customized lexicon
    pub fn with_lexicon(lexicon: PolarityLexicon) -> Self {
        Self { lexicon }
    }

    /// Access the underlying lexicon
    pub fn lexicon(&self) -> &PolarityLexicon {
        &self.lexicon
    }

    /// Score a text into a sentiment judgment
    ///
    /// Tokenizes, sums matched lexicon weights into a raw integer
    /// score (flipping the sign of a match when the preceding token
    /// is a negator), then normalizes by dividing by 10 and clamping
    /// to [-1, 1]. The label follows the sign of the raw sum and
    /// `confidence = |score|`.
    pub fn score(&self, text: &str) -> SentimentJudgment {
        self.analyze(text).judgment
    }

    /// Full analysis: judgment plus raw score, comparative, and the
    /// matched term lists
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = tokenize(text);

        let mut raw_score: i64 = 0;
        let mut positive_terms = Vec::new();
        let mut negative_terms = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(weight) = self.lexicon.weight(token) else {
                continue;
            };

            let negated = i > 0 && self.lexicon.is_negator(&tokens[i - 1]);
            let effective = if negated { -weight } else { weight };

            raw_score = raw_score.saturating_add(effective as i64);

            if effective > 0 {
                positive_terms.push(token.clone());
            } else if effective < 0 {
                negative_terms.push(token.clone());
            }
        }

        let judgment = SentimentJudgment::from_raw_score(raw_score);
        let comparative = if tokens.is_empty() {
            0.0
        } else {
            raw_score as f64 / tokens.len() as f64
        };

        debug!(
            raw_score,
            token_count = tokens.len(),
            label = %judgment.label,
            "scored feedback text"
        );

        SentimentAnalysis {
            judgment,
            raw_score,
            comparative,
            positive_terms,
            negative_terms,
            token_count: tokens.len(),
        }
    }

    /// Score each text in input order; no cross-item interaction
    pub fn score_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentJudgment> {
        texts.iter().map(|text| self.score(text.as_ref())).collect()
    }
}

/// Lowercase, strip punctuation, split on whitespace
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.replace(STRIP_CHARS, ""))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = SentimentScorer::new();
        let judgment =
            scorer.score("The customer service was absolutely fantastic! Very responsive and helpful.");
        assert_eq!(judgment.label, SentimentLabel::Positive);
        assert!(judgment.score > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let scorer = SentimentScorer::new();
        let judgment = scorer.score("The app crashed multiple times. Very disappointed.");
        assert_eq!(judgment.label, SentimentLabel::Negative);
        assert!(judgment.score < 0.0);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score(""), SentimentJudgment::neutral());
        assert_eq!(scorer.score("   \t\n  "), SentimentJudgment::neutral());
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let scorer = SentimentScorer::new();
        let judgment = scorer.score("the meeting is scheduled for tomorrow");
        assert_eq!(judgment.label, SentimentLabel::Neutral);
        assert_eq!(judgment.score, 0.0);
        assert_eq!(judgment.confidence, 0.0);
    }

    #[test]
    fn test_non_english_text_is_neutral() {
        let scorer = SentimentScorer::new();
        let judgment = scorer.score("это сообщение на другом языке 感谢");
        assert_eq!(judgment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_confidence_is_abs_score() {
        let scorer = SentimentScorer::new();
        for text in [
            "fantastic",
            "terrible awful broken",
            "it works as described",
            "",
        ] {
            let judgment = scorer.score(text);
            assert_eq!(judgment.confidence, judgment.score.abs());
        }
    }

    #[test]
    fn test_label_follows_raw_sign() {
        let scorer = SentimentScorer::new();
        for text in [
            "good bad",
            "great terrible awful",
            "fantastic",
            "nothing here at all",
        ] {
            let analysis = scorer.analyze(text);
            let expected = SentimentLabel::from_raw_score(analysis.raw_score);
            assert_eq!(analysis.judgment.label, expected);
        }
    }

    #[test]
    fn test_score_is_clamped() {
        let scorer = SentimentScorer::new();
        let strongly_positive = "fantastic ".repeat(50);
        let strongly_negative = "terrible ".repeat(50);

        let pos = scorer.score(&strongly_positive);
        let neg = scorer.score(&strongly_negative);

        assert_eq!(pos.score, 1.0);
        assert_eq!(neg.score, -1.0);
        assert_eq!(pos.confidence, 1.0);
    }

    #[test]
    fn test_normalization_divisor() {
        let scorer = SentimentScorer::new();
        // fantastic(4) + helpful(2) = 6 -> 0.6
        let analysis = scorer.analyze("fantastic and helpful");
        assert_eq!(analysis.raw_score, 6);
        assert!((analysis.judgment.score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = SentimentScorer::new();
        let plain = scorer.score("the product is good");
        let negated = scorer.score("the product is not good");

        assert_eq!(plain.label, SentimentLabel::Positive);
        assert_eq!(negated.label, SentimentLabel::Negative);
        assert!((plain.score + negated.score).abs() < 1e-9);
    }

    #[test]
    fn test_negation_with_apostrophe() {
        let scorer = SentimentScorer::new();
        let judgment = scorer.score("I don't recommend this");
        assert_eq!(judgment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_idempotent() {
        let scorer = SentimentScorer::new();
        let text = "Great experience, but the delivery was late.";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn test_case_insensitive() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("FANTASTIC"), scorer.score("fantastic"));
    }

    #[test]
    fn test_punctuation_stripped() {
        let scorer = SentimentScorer::new();
        let with = scorer.score("fantastic!!! (really)");
        let without = scorer.score("fantastic really");
        assert_eq!(with, without);
    }

    #[test]
    fn test_analyze_term_lists() {
        let scorer = SentimentScorer::new();
        let analysis = scorer.analyze("Great product but terrible support");

        assert_eq!(analysis.positive_terms, vec!["great"]);
        assert_eq!(analysis.negative_terms, vec!["terrible"]);
        assert_eq!(analysis.token_count, 5);
    }

    #[test]
    fn test_comparative() {
        let scorer = SentimentScorer::new();
        // good(3) over 4 tokens
        let analysis = scorer.analyze("this is pretty good");
        assert!((analysis.comparative - 0.75).abs() < 1e-9);

        let empty = scorer.analyze("");
        assert_eq!(empty.comparative, 0.0);
    }

    #[test]
    fn test_batch_matches_single() {
        let scorer = SentimentScorer::new();
        let texts = ["amazing service", "utterly terrible", ""];
        let batch = scorer.score_batch(&texts);

        assert_eq!(batch.len(), 3);
        for (text, judgment) in texts.iter().zip(&batch) {
            assert_eq!(*judgment, scorer.score(text));
        }
    }

    #[test]
    fn test_custom_term_participates() {
        let lexicon = PolarityLexicon::new().with_term("lit", 3);
        let scorer = SentimentScorer::with_lexicon(lexicon);

        let judgment = scorer.score("this release is lit");
        assert_eq!(judgment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_very_long_input() {
        let scorer = SentimentScorer::new();
        let long = "word ".repeat(200_000);
        let judgment = scorer.score(&long);
        assert_eq!(judgment, SentimentJudgment::neutral());
    }

    #[test]
    fn test_label_round_trip() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            let parsed: SentimentLabel = label.to_string().parse().unwrap();
            assert_eq!(parsed, label);
        }

        let err = "Mixed".parse::<SentimentLabel>().unwrap_err();
        assert_eq!(err, ParseLabelError("Mixed".to_string()));
    }

    #[test]
    fn test_judgment_wire_shape() {
        let scorer = SentimentScorer::new();
        let judgment = scorer.score("fantastic");
        let json = serde_json::to_value(judgment).unwrap();

        assert_eq!(json["label"], "Positive");
        assert_eq!(json["score"], 0.4);
        assert_eq!(json["confidence"], 0.4);
    }
}
