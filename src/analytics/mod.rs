//! # Analytics Module
//!
//! Aggregated sentiment statistics, daily trend series, and the
//! analytics report payload. Everything here is a pure function of
//! the records handed in by the query layer; nothing is cached, so
//! every read recomputes and staleness cannot occur.

mod report;
mod stats;
mod trend;

pub use report::{AnalyticsReport, RecordQuery};
pub use stats::{aggregate, breakdown_by_label, LabelStats, SentimentStats};
pub use trend::{bucket_by_day, TrendBucket, TrendDate};
