//! # Analytics Report
//!
//! Record filtering and the combined stats-plus-trend payload served
//! by the analytics endpoint.

use super::stats::{aggregate, SentimentStats};
use super::trend::{bucket_by_day, TrendBucket};
use crate::feedback::FeedbackRecord;
use crate::sentiment::{SentimentJudgment, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter over stored feedback records
///
/// Mirrors the read path's query parameters: an inclusive date range
/// and an exact sentiment label. Ownership filtering stays with the
/// persistence layer.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
    label: Option<SentimentLabel>,
}

impl RecordQuery {
    /// An unconstrained query matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep records created at or after the given instant
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Keep records created at or before the given instant
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Keep records with exactly the given label
    pub fn with_label(mut self, label: SentimentLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Whether a record satisfies every set constraint
    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        if let Some(since) = self.since {
            if record.created_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if record.created_at > until {
                return false;
            }
        }
        if let Some(label) = self.label {
            if record.sentiment.label != label {
                return false;
            }
        }
        true
    }

    /// Filter a record collection, preserving input order
    pub fn apply(&self, records: &[FeedbackRecord]) -> Vec<FeedbackRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// The analytics endpoint payload: summary statistics plus the daily
/// trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Always true; the surrounding web layer owns failure responses
    pub success: bool,
    /// Distributional statistics over the queried records
    pub stats: SentimentStats,
    /// Daily trend, ascending by calendar day
    pub trend: Vec<TrendBucket>,
}

impl AnalyticsReport {
    /// Build the report for a queried record collection
    pub fn build(records: &[FeedbackRecord]) -> Self {
        let judgments: Vec<SentimentJudgment> =
            records.iter().map(|record| record.sentiment).collect();

        Self {
            success: true,
            stats: aggregate(&judgments),
            trend: bucket_by_day(records),
        }
    }
}
