//! Sentiment labels and the compound-score threshold rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold separating Neutral from Positive/Negative.
pub const COMPOUND_THRESHOLD: f64 = 0.05;

/// Discrete sentiment label for one feedback item or a batch average.
///
/// `Error` marks items the scorer failed on; it never applies to the
/// batch average (error items contribute zero there instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Error,
}

impl Sentiment {
    /// Classify a single item's compound score.
    ///
    /// Boundary values land on the non-neutral side: exactly 0.05 is
    /// Positive and exactly -0.05 is Negative.
    pub fn classify(compound: f64) -> Self {
        if compound >= COMPOUND_THRESHOLD {
            Sentiment::Positive
        } else if compound <= -COMPOUND_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Classify the batch average compound score.
    ///
    /// Uses strict comparisons, so an average of exactly 0.05 is Neutral
    /// while a single item at 0.05 is Positive. Callers observe this
    /// asymmetry; do not unify the two rules.
    pub fn classify_average(average: f64) -> Self {
        if average > COMPOUND_THRESHOLD {
            Sentiment::Positive
        } else if average < -COMPOUND_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Error => "Error",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
