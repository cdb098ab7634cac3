//! # Daily Sentiment Trend
//!
//! Buckets scored records by calendar day for the dashboard's trend
//! chart.

use crate::feedback::FeedbackRecord;
use crate::sentiment::SentimentLabel;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A calendar day, ordered by (year, month, day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrendDate {
    /// Calendar year
    pub year: i32,
    /// Month of year, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
}

impl TrendDate {
    /// The UTC calendar day of a timestamp
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
            day: timestamp.day(),
        }
    }
}

/// One day's worth of aggregated sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// The calendar day
    pub date: TrendDate,
    /// Number of records on that day
    pub count: usize,
    /// Mean score across the day's records
    #[serde(rename = "avgScore")]
    pub avg_score: f64,
    /// Count labeled Positive
    pub positive: usize,
    /// Count labeled Negative
    pub negative: usize,
    /// Count labeled Neutral
    pub neutral: usize,
}

#[derive(Default)]
struct BucketAccumulator {
    count: usize,
    score_sum: f64,
    positive: usize,
    negative: usize,
    neutral: usize,
}

/// Group records by the UTC calendar day of their creation timestamp
///
/// Buckets come back ascending by (year, month, day). Days with no
/// records are absent from the output, not present with a zero count.
/// Day boundaries follow UTC, mirroring how the stored timestamps are
/// grouped upstream.
pub fn bucket_by_day(records: &[FeedbackRecord]) -> Vec<TrendBucket> {
    let mut buckets: BTreeMap<TrendDate, BucketAccumulator> = BTreeMap::new();

    for record in records {
        let date = TrendDate::from_timestamp(record.created_at);
        let acc = buckets.entry(date).or_default();

        acc.count += 1;
        acc.score_sum += record.sentiment.score;
        match record.sentiment.label {
            SentimentLabel::Positive => acc.positive += 1,
            SentimentLabel::Negative => acc.negative += 1,
            SentimentLabel::Neutral => acc.neutral += 1,
        }
    }

    buckets
        .into_iter()
        .map(|(date, acc)| TrendBucket {
            date,
            count: acc.count,
            avg_score: acc.score_sum / acc.count as f64,
            positive: acc.positive,
            negative: acc.negative,
            neutral: acc.neutral,
        })
        .collect()
}
