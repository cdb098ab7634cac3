//! # Polarity Lexicon
//!
//! Fixed word-to-weight table for lexical sentiment scoring.

use std::collections::HashMap;

/// Default polarity entries, AFINN-style signed integer weights in -5..=5.
///
/// Covers general sentiment vocabulary plus the customer-feedback terms
/// that show up in support, product, and delivery comments.
const DEFAULT_WEIGHTS: &[(&str, i32)] = &[
    // Strongly positive
    ("outstanding", 5),
    ("superb", 5),
    ("amazing", 4),
    ("awesome", 4),
    ("fantastic", 4),
    ("wonderful", 4),
    ("brilliant", 4),
    ("delighted", 4),
    ("exceptional", 4),
    ("stellar", 4),
    ("flawless", 4),
    // Positive
    ("excellent", 3),
    ("great", 3),
    ("good", 3),
    ("love", 3),
    ("loved", 3),
    ("loves", 3),
    ("best", 3),
    ("perfect", 3),
    ("impressive", 3),
    ("happy", 3),
    ("pleased", 3),
    ("glad", 3),
    ("nice", 3),
    ("helpful", 2),
    ("friendly", 2),
    ("responsive", 2),
    ("smooth", 2),
    ("reliable", 2),
    ("recommend", 2),
    ("recommended", 2),
    ("satisfied", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("thank", 2),
    ("thanks", 2),
    ("appreciate", 2),
    ("appreciated", 2),
    ("convenient", 2),
    ("intuitive", 2),
    ("polite", 2),
    ("courteous", 2),
    ("professional", 2),
    ("prompt", 2),
    ("resolved", 2),
    ("improved", 2),
    ("improvement", 2),
    ("valuable", 2),
    ("effective", 2),
    ("efficient", 2),
    ("seamless", 2),
    ("affordable", 2),
    ("fine", 2),
    ("fast", 1),
    ("quick", 1),
    ("quickly", 1),
    ("easy", 1),
    // Mildly negative
    ("difficult", -1),
    ("hard", -1),
    ("complicated", -1),
    ("late", -1),
    ("delay", -1),
    ("delayed", -1),
    ("expensive", -1),
    ("issue", -1),
    ("issues", -1),
    ("mediocre", -1),
    ("noisy", -1),
    ("cancel", -1),
    ("cancelled", -1),
    // Negative
    ("poor", -2),
    ("disappoint", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("frustrating", -2),
    ("frustrated", -2),
    ("annoying", -2),
    ("annoyed", -2),
    ("crash", -2),
    ("crashed", -2),
    ("crashes", -2),
    ("bug", -2),
    ("buggy", -2),
    ("slow", -2),
    ("laggy", -2),
    ("unresponsive", -2),
    ("confusing", -2),
    ("confused", -2),
    ("rude", -2),
    ("unhelpful", -2),
    ("unfriendly", -2),
    ("useless", -2),
    ("waste", -2),
    ("wasted", -2),
    ("upset", -2),
    ("unhappy", -2),
    ("dissatisfied", -2),
    ("unacceptable", -2),
    ("unreliable", -2),
    ("missing", -2),
    ("overpriced", -2),
    ("complain", -2),
    ("complaint", -2),
    ("problem", -2),
    ("problems", -2),
    ("error", -2),
    ("errors", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("ignored", -2),
    ("unprofessional", -2),
    ("mess", -2),
    ("dirty", -2),
    ("stuck", -2),
    ("wrong", -2),
    ("lie", -2),
    ("lied", -2),
    ("dislike", -2),
    ("broken", -2),
    // Strongly negative
    ("awful", -3),
    ("terrible", -3),
    ("horrible", -3),
    ("bad", -3),
    ("worst", -3),
    ("worse", -3),
    ("hate", -3),
    ("hated", -3),
    ("angry", -3),
    ("defective", -3),
    ("damaged", -3),
    ("scam", -4),
    ("fraud", -4),
];

/// Negation words that flip the sign of the immediately following match.
const NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't", "isnt",
    "isn't",
];

/// Polarity lexicon mapping words to signed integer sentiment weights
///
/// Immutable once built; construct it at process start and share it
/// by reference across request-handling contexts.
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    /// Word to signed weight mapping
    weights: HashMap<String, i32>,
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityLexicon {
    /// Create a lexicon with the default polarity table
    pub fn new() -> Self {
        let weights = DEFAULT_WEIGHTS
            .iter()
            .map(|&(word, weight)| (word.to_string(), weight))
            .collect();

        Self { weights }
    }

    /// Add or override an entry, returning the lexicon for chaining
    pub fn with_term(mut self, word: &str, weight: i32) -> Self {
        self.weights.insert(word.to_lowercase(), weight);
        self
    }

    /// Get the signed weight for a word, if it carries polarity
    pub fn weight(&self, word: &str) -> Option<i32> {
        self.weights.get(&word.to_lowercase()).copied()
    }

    /// Check if a word negates the following match
    pub fn is_negator(&self, word: &str) -> bool {
        NEGATORS.contains(&word.to_lowercase().as_str())
    }

    /// Number of entries in the polarity table
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the polarity table is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
