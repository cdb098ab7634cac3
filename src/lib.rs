//! # Sentiview
//!
//! Sentiment scoring and analytics core for a client-feedback dashboard.
//!
//! The library turns free feedback text into a sentiment judgment
//! (label, score, confidence), folds collections of judgments into
//! distributional statistics, and buckets scored records into a daily
//! trend series for the dashboard.
//!
//! ## Modules
//!
//! - `sentiment` - Polarity lexicon and lexical sentiment scoring
//! - `analytics` - Aggregated statistics, daily trend, report assembly
//! - `feedback` - Feedback record shape and the demo sample corpus
//!
//! ## Example Usage
//!
//! ```
//! use sentiview::{SentimentScorer, SentimentLabel, analytics};
//!
//! let scorer = SentimentScorer::new();
//!
//! let judgment = scorer.score("The support team was fantastic and very helpful!");
//! assert_eq!(judgment.label, SentimentLabel::Positive);
//!
//! let stats = analytics::aggregate(&[judgment]);
//! assert_eq!(stats.total, 1);
//! assert_eq!(stats.positive, 1);
//! ```

pub mod analytics;
pub mod feedback;
pub mod sentiment;

// Re-exports for convenience
pub use analytics::{
    aggregate, breakdown_by_label, bucket_by_day, AnalyticsReport, LabelStats, RecordQuery,
    SentimentStats, TrendBucket, TrendDate,
};
pub use feedback::{sample_records, FeedbackRecord};
pub use sentiment::{
    ParseLabelError, PolarityLexicon, SentimentAnalysis, SentimentJudgment, SentimentLabel,
    SentimentScorer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Divisor mapping raw integer polarity sums onto the [-1, 1] score range
    pub const NORMALIZATION_DIVISOR: f64 = 10.0;

    /// Lower bound of the normalized sentiment score
    pub const SCORE_MIN: f64 = -1.0;

    /// Upper bound of the normalized sentiment score
    pub const SCORE_MAX: f64 = 1.0;
}
