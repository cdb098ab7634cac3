//! # Sentiment Module
//!
//! Polarity lexicon and lexical sentiment scoring for feedback text.

mod lexicon;
mod scorer;

pub use lexicon::PolarityLexicon;
pub use scorer::{
    ParseLabelError, SentimentAnalysis, SentimentJudgment, SentimentLabel, SentimentScorer,
};
