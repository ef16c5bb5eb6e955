//! JSON schemas for the sentiment API.

use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

/// Request to analyze a batch of feedback strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Ordered batch of free-text feedback. A missing field is treated
    /// the same as an empty list and rejected before scoring.
    #[serde(default)]
    pub feedbacks: Vec<String>,
}

/// The four polarity scores produced for one text.
///
/// `pos + neg + neu` sums to roughly 1.0 (a property of the scorer,
/// not enforced here); `compound` is a normalized scalar in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// All-zero scores, used for items the scorer failed on.
    pub fn zeroed() -> Self {
        Self {
            pos: 0.0,
            neg: 0.0,
            neu: 0.0,
            compound: 0.0,
        }
    }
}

/// Per-item analysis detail, one per input string, input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackDetail {
    pub text: String,
    pub sentiment: Sentiment,
    pub compound_score: f64,
    /// `round(|compound| * 100, 2)` — a strength proxy, not a probability.
    pub confidence: f64,
    pub scores: PolarityScores,
}

/// Aggregate statistics over one batch.
///
/// Error items are excluded from the three counts but still included
/// in the `total` that percentages and the average divide by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub average_compound_score: f64,
    pub overall_sentiment: Sentiment,
}

/// Response for a successful analyze call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiments: Vec<Sentiment>,
    pub details: Vec<FeedbackDetail>,
    pub summary: BatchSummary,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body returned on any 4xx/5xx.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_feedbacks_field_defaults_to_empty() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.feedbacks.is_empty());
    }

    #[test]
    fn detail_serializes_with_expected_keys() {
        let detail = FeedbackDetail {
            text: "great".to_string(),
            sentiment: Sentiment::Positive,
            compound_score: 0.6249,
            confidence: 62.49,
            scores: PolarityScores {
                pos: 1.0,
                neg: 0.0,
                neu: 0.0,
                compound: 0.6249,
            },
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["sentiment"], "Positive");
        assert_eq!(value["compound_score"], 0.6249);
        assert_eq!(value["scores"]["neg"], 0.0);
    }

    #[test]
    fn zeroed_scores_are_all_zero() {
        let scores = PolarityScores::zeroed();
        assert_eq!(scores.pos, 0.0);
        assert_eq!(scores.neg, 0.0);
        assert_eq!(scores.neu, 0.0);
        assert_eq!(scores.compound, 0.0);
    }
}
