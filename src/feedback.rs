//! # Feedback Records
//!
//! In-memory shape of a stored feedback item, plus the sample corpus
//! driving the demo binary and integration fixtures.

use crate::sentiment::{SentimentJudgment, SentimentScorer};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A client-feedback item as the analytics core consumes it
///
/// Persistence identifiers and ownership stay with the external CRUD
/// layer; the judgment is set once at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Name of the client who left the feedback
    pub client_name: String,
    /// The feedback text itself
    #[serde(rename = "feedback")]
    pub text: String,
    /// Feedback category (Support, Product, Delivery, ...)
    pub category: String,
    /// Optional 1-5 star rating
    pub rating: Option<u8>,
    /// Sentiment judgment, assigned at creation time
    pub sentiment: SentimentJudgment,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Create a record, scoring the text with the given scorer
    pub fn new(
        scorer: &SentimentScorer,
        client_name: &str,
        text: &str,
        category: &str,
        rating: Option<u8>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            client_name: client_name.to_string(),
            text: text.to_string(),
            category: category.to_string(),
            rating,
            sentiment: scorer.score(text),
            created_at,
        }
    }
}

/// Sample feedback corpus: name, text, category, rating.
const SAMPLE_FEEDBACK: &[(&str, &str, &str, u8)] = &[
    (
        "John Smith",
        "The customer service was absolutely fantastic! Very responsive and helpful.",
        "Support",
        5,
    ),
    (
        "Sarah Johnson",
        "I had a great experience with the product. Highly recommend!",
        "Product",
        5,
    ),
    (
        "Mike Chen",
        "The app crashed multiple times. Very disappointed.",
        "Technical",
        1,
    ),
    (
        "Emily Brown",
        "The delivery took longer than expected, but the product quality is excellent.",
        "Delivery",
        3,
    ),
    (
        "David Wilson",
        "Amazing service! Will definitely come back.",
        "Service",
        5,
    ),
    (
        "Lisa Anderson",
        "The website is confusing and hard to navigate.",
        "UX",
        2,
    ),
    (
        "Robert Taylor",
        "The product is okay, nothing special.",
        "Product",
        3,
    ),
    (
        "Jennifer Lee",
        "Excellent support team! They resolved my issue quickly.",
        "Support",
        5,
    ),
    (
        "Chris Martinez",
        "The price is too high for what you get.",
        "Pricing",
        2,
    ),
    (
        "Amanda Garcia",
        "Good service overall. Met my expectations.",
        "Service",
        4,
    ),
    (
        "James Rodriguez",
        "I absolutely love this product! Best purchase ever.",
        "Product",
        5,
    ),
    (
        "Patricia White",
        "The customer service is rude and unhelpful.",
        "Support",
        1,
    ),
    (
        "Mark Harris",
        "Fast shipping and great packaging.",
        "Delivery",
        5,
    ),
    ("Linda Clark", "It works as described.", "Product", 3),
    (
        "Charles Lewis",
        "Could not get a refund even after returning the item.",
        "Support",
        1,
    ),
];

/// Build the 15-record sample corpus, scored with the given scorer
///
/// Timestamps are deterministic relative to the current time: record
/// `i` lands `i / 2` days back, with alternating records pushed six
/// hours earlier, spreading the corpus over the last eight calendar
/// days.
pub fn sample_records(scorer: &SentimentScorer) -> Vec<FeedbackRecord> {
    let now = Utc::now();

    SAMPLE_FEEDBACK
        .iter()
        .enumerate()
        .map(|(i, &(client_name, text, category, rating))| {
            let created_at =
                now - Duration::days((i / 2) as i64) - Duration::hours((i % 2) as i64 * 6);
            FeedbackRecord::new(scorer, client_name, text, category, Some(rating), created_at)
        })
        .collect()
}
