//! Sentiment Dashboard Demo
//!
//! Scores the sample feedback corpus and prints the dashboard's
//! aggregated statistics, per-label breakdown, and daily trend.
//!
//! Run with: cargo run --bin dashboard_demo

use sentiview::{
    aggregate, breakdown_by_label, sample_records, AnalyticsReport, RecordQuery, SentimentLabel,
    SentimentScorer,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // Setup logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("{}", "=".repeat(70));
    println!("Sentiview - Client Feedback Sentiment Demo");
    println!("{}", "=".repeat(70));

    let scorer = SentimentScorer::new();
    let records = sample_records(&scorer);

    println!("\nSCORED FEEDBACK");
    println!("{}", "-".repeat(70));

    for record in &records {
        let marker = match record.sentiment.label {
            SentimentLabel::Positive => "[+]",
            SentimentLabel::Negative => "[-]",
            SentimentLabel::Neutral => "[ ]",
        };

        println!(
            "{} {:<16} {:>5.2}  \"{}\"",
            marker,
            record.client_name,
            record.sentiment.score,
            truncate_text(&record.text, 44)
        );
    }

    // Summary statistics over the full corpus
    let judgments: Vec<_> = records.iter().map(|r| r.sentiment).collect();
    let stats = aggregate(&judgments);

    println!("\nSUMMARY");
    println!("{}", "-".repeat(70));
    println!("  Total feedback:  {}", stats.total);
    println!("  Positive:        {} ({}%)", stats.positive, stats.positive_percentage);
    println!("  Negative:        {} ({}%)", stats.negative, stats.negative_percentage);
    println!("  Neutral:         {} ({}%)", stats.neutral, stats.neutral_percentage);
    println!("  Average score:   {}", stats.average_score);

    println!("\nBY LABEL");
    println!("{}", "-".repeat(70));
    for entry in breakdown_by_label(&judgments) {
        println!(
            "  {:<10} count: {:>2}  avg score: {:>5.2}",
            entry.label.to_string(),
            entry.count,
            entry.avg_score
        );
    }

    // Daily trend for the positive records only, via the query filter
    let positive_only = RecordQuery::new()
        .with_label(SentimentLabel::Positive)
        .apply(&records);

    println!("\nPOSITIVE FEEDBACK PER DAY");
    println!("{}", "-".repeat(70));
    let report = AnalyticsReport::build(&positive_only);
    for bucket in &report.trend {
        println!(
            "  {:04}-{:02}-{:02}  count: {}  avg score: {:.2}",
            bucket.date.year, bucket.date.month, bucket.date.day, bucket.count, bucket.avg_score
        );
    }

    // Full analytics payload, as the endpoint would serve it
    println!("\nANALYTICS PAYLOAD");
    println!("{}", "-".repeat(70));
    let full_report = AnalyticsReport::build(&records);
    if let Ok(json) = serde_json::to_string_pretty(&full_report) {
        println!("{}", json);
    }

    println!("\n{}", "=".repeat(70));
    println!("Demo complete!");
    println!("{}", "=".repeat(70));
}

fn truncate_text(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else {
        format!("{}...", &text[..max_len])
    }
}
