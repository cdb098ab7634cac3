//! # Sentiment Statistics
//!
//! Distributional statistics over a collection of judgments.

use crate::sentiment::{SentimentJudgment, SentimentLabel};
use serde::{Deserialize, Serialize};

/// Aggregated sentiment statistics
///
/// Derived on every read; never persisted. Percentages and the
/// average score are 2-decimal strings, matching the dashboard's
/// display convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentStats {
    /// Total number of judgments
    pub total: usize,
    /// Count labeled Positive
    pub positive: usize,
    /// Count labeled Negative
    pub negative: usize,
    /// Count labeled Neutral
    pub neutral: usize,
    /// Positive share of total, as a percentage
    #[serde(rename = "positivePercentage")]
    pub positive_percentage: String,
    /// Negative share of total, as a percentage
    #[serde(rename = "negativePercentage")]
    pub negative_percentage: String,
    /// Neutral share of total, as a percentage
    #[serde(rename = "neutralPercentage")]
    pub neutral_percentage: String,
    /// Arithmetic mean of all scores
    #[serde(rename = "averageScore")]
    pub average_score: String,
}

impl SentimentStats {
    /// The all-zero statistics for an empty collection
    pub fn empty() -> Self {
        Self {
            total: 0,
            positive: 0,
            negative: 0,
            neutral: 0,
            positive_percentage: format_2dp(0.0),
            negative_percentage: format_2dp(0.0),
            neutral_percentage: format_2dp(0.0),
            average_score: format_2dp(0.0),
        }
    }
}

/// Fold a sequence of judgments into summary statistics
///
/// Empty input is the normal zero case; no division by zero can
/// propagate.
pub fn aggregate(judgments: &[SentimentJudgment]) -> SentimentStats {
    if judgments.is_empty() {
        return SentimentStats::empty();
    }

    let total = judgments.len();
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;
    let mut score_sum = 0.0f64;

    for judgment in judgments {
        match judgment.label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
        score_sum += judgment.score;
    }

    let percentage = |count: usize| format_2dp(count as f64 / total as f64 * 100.0);

    SentimentStats {
        total,
        positive,
        negative,
        neutral,
        positive_percentage: percentage(positive),
        negative_percentage: percentage(negative),
        neutral_percentage: percentage(neutral),
        average_score: format_2dp(score_sum / total as f64),
    }
}

/// Per-label breakdown for the system-wide statistics view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStats {
    /// The sentiment label
    pub label: SentimentLabel,
    /// Number of judgments with this label
    pub count: usize,
    /// Mean score across those judgments
    #[serde(rename = "avgScore")]
    pub avg_score: f64,
}

/// Group judgments by label, with count and mean score per label
///
/// Emitted in the fixed order Positive, Negative, Neutral; labels
/// with no judgments are omitted.
pub fn breakdown_by_label(judgments: &[SentimentJudgment]) -> Vec<LabelStats> {
    [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ]
    .into_iter()
    .filter_map(|label| {
        let mut count = 0usize;
        let mut score_sum = 0.0f64;

        for judgment in judgments.iter().filter(|j| j.label == label) {
            count += 1;
            score_sum += judgment.score;
        }

        (count > 0).then(|| LabelStats {
            label,
            count,
            avg_score: score_sum / count as f64,
        })
    })
    .collect()
}

/// Format a number to two decimal places, dashboard-style
fn format_2dp(value: f64) -> String {
    format!("{:.2}", value)
}
