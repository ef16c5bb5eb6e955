//! Batch sentiment aggregation.
//!
//! The core request transform: score each feedback string, classify it,
//! and fold the batch into summary statistics. Order in equals order
//! out; a single unscorable item downgrades to an `Error` entry instead
//! of failing the batch.

use crate::scorer::PolarityScorer;
use sentiment_common::{
    AnalyzeResponse, BatchSummary, FeedbackDetail, PolarityScores, Sentiment,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No feedbacks provided")]
    EmptyBatch,
}

/// Analyzes feedback batches with an injected scorer.
///
/// Holds no mutable state; clones share the scorer and are safe to use
/// across concurrent requests.
#[derive(Clone)]
pub struct BatchAnalyzer {
    scorer: Arc<dyn PolarityScorer>,
}

impl BatchAnalyzer {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Score and classify every item, then aggregate.
    ///
    /// Fails fast on an empty batch, before any scoring. Per-item scorer
    /// failures are recovered locally: the item becomes an `Error` entry
    /// with zeroed scores, counts toward `total` and contributes zero to
    /// the average, and the loop continues.
    pub fn analyze(&self, feedbacks: &[String]) -> Result<AnalyzeResponse, AnalysisError> {
        if feedbacks.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }

        let total = feedbacks.len();
        info!("Analyzing {} feedbacks", total);

        let mut sentiments = Vec::with_capacity(total);
        let mut details = Vec::with_capacity(total);
        let mut positive_count = 0usize;
        let mut negative_count = 0usize;
        let mut neutral_count = 0usize;
        let mut compound_sum = 0.0f64;

        for (i, text) in feedbacks.iter().enumerate() {
            let preview: String = text.chars().take(50).collect();
            info!("Analyzing feedback {}/{}: {}", i + 1, total, preview);

            let detail = match self.scorer.score(text) {
                Ok(scores) => {
                    let sentiment = Sentiment::classify(scores.compound);
                    FeedbackDetail {
                        text: text.clone(),
                        sentiment,
                        compound_score: scores.compound,
                        confidence: round2(scores.compound.abs() * 100.0),
                        scores,
                    }
                }
                Err(e) => {
                    error!("Error analyzing feedback {}: {}", i + 1, e);
                    FeedbackDetail {
                        text: text.clone(),
                        sentiment: Sentiment::Error,
                        compound_score: 0.0,
                        confidence: 0.0,
                        scores: PolarityScores::zeroed(),
                    }
                }
            };

            match detail.sentiment {
                Sentiment::Positive => positive_count += 1,
                Sentiment::Negative => negative_count += 1,
                Sentiment::Neutral => neutral_count += 1,
                Sentiment::Error => {}
            }
            compound_sum += detail.compound_score;

            info!(
                "Feedback {} sentiment: {} (compound: {})",
                i + 1,
                detail.sentiment,
                detail.compound_score
            );
            sentiments.push(detail.sentiment);
            details.push(detail);
        }

        // total > 0 is guaranteed by the empty check above.
        let total_f = total as f64;
        let average_compound_score = compound_sum / total_f;
        let summary = BatchSummary {
            positive_count,
            negative_count,
            neutral_count,
            positive_percentage: positive_count as f64 / total_f * 100.0,
            negative_percentage: negative_count as f64 / total_f * 100.0,
            neutral_percentage: neutral_count as f64 / total_f * 100.0,
            average_compound_score,
            overall_sentiment: Sentiment::classify_average(average_compound_score),
        };

        info!("Analysis complete: {:?}", sentiments);

        Ok(AnalyzeResponse {
            sentiments,
            details,
            summary,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use approx::assert_relative_eq;

    /// Scorer for tests: the text itself is the compound score, and
    /// anything unparsable fails the item.
    struct StubScorer;

    impl PolarityScorer for StubScorer {
        fn score(&self, text: &str) -> Result<PolarityScores> {
            let compound: f64 = text
                .trim()
                .parse()
                .map_err(|_| anyhow!("unscorable item: {text}"))?;
            Ok(PolarityScores {
                pos: compound.max(0.0),
                neg: (-compound).max(0.0),
                neu: 1.0 - compound.abs(),
                compound,
            })
        }
    }

    fn analyzer() -> BatchAnalyzer {
        BatchAnalyzer::new(Arc::new(StubScorer))
    }

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert!(matches!(
            analyzer().analyze(&[]),
            Err(AnalysisError::EmptyBatch)
        ));
    }

    #[test]
    fn mixed_batch_counts_and_percentages() {
        let response = analyzer().analyze(&batch(&["0.5", "-0.5", "0.0"])).unwrap();
        let summary = &response.summary;
        assert_eq!(summary.positive_count, 1);
        assert_eq!(summary.negative_count, 1);
        assert_eq!(summary.neutral_count, 1);
        assert_relative_eq!(summary.positive_percentage, 100.0 / 3.0);
        assert_relative_eq!(summary.negative_percentage, 100.0 / 3.0);
        assert_relative_eq!(summary.neutral_percentage, 100.0 / 3.0);
        assert_relative_eq!(summary.average_compound_score, 0.0);
        assert_eq!(summary.overall_sentiment, Sentiment::Neutral);
    }

    #[test]
    fn item_and_average_thresholds_disagree_at_the_boundary() {
        // A lone item at exactly 0.05 is Positive, but the batch average
        // of 0.05 classifies Neutral overall.
        let response = analyzer().analyze(&batch(&["0.05"])).unwrap();
        assert_eq!(response.sentiments, vec![Sentiment::Positive]);
        assert_relative_eq!(response.summary.average_compound_score, 0.05);
        assert_eq!(response.summary.overall_sentiment, Sentiment::Neutral);
    }

    #[test]
    fn failed_item_becomes_error_entry_and_batch_continues() {
        let response = analyzer()
            .analyze(&batch(&["0.5", "boom", "0.2"]))
            .unwrap();
        assert_eq!(
            response.sentiments,
            vec![Sentiment::Positive, Sentiment::Error, Sentiment::Positive]
        );

        let failed = &response.details[1];
        assert_eq!(failed.text, "boom");
        assert_eq!(failed.compound_score, 0.0);
        assert_eq!(failed.confidence, 0.0);
        assert_eq!(failed.scores, PolarityScores::zeroed());

        // excluded from the three counts, included in the denominator
        let summary = &response.summary;
        assert_eq!(summary.positive_count, 2);
        assert_eq!(summary.negative_count, 0);
        assert_eq!(summary.neutral_count, 0);
        assert_relative_eq!(summary.positive_percentage, 200.0 / 3.0);
        assert_relative_eq!(summary.average_compound_score, 0.7 / 3.0);
    }

    #[test]
    fn output_preserves_input_order_and_length() {
        let input = batch(&["0.9", "-0.9", "0.01", "-0.01", "0.3"]);
        let response = analyzer().analyze(&input).unwrap();
        assert_eq!(response.details.len(), input.len());
        assert_eq!(response.sentiments.len(), input.len());
        for (item, detail) in input.iter().zip(&response.details) {
            assert_eq!(item, &detail.text);
        }
        assert_eq!(
            response.sentiments,
            vec![
                Sentiment::Positive,
                Sentiment::Negative,
                Sentiment::Neutral,
                Sentiment::Neutral,
                Sentiment::Positive
            ]
        );
    }

    #[test]
    fn confidence_is_scaled_absolute_compound_rounded_to_cents() {
        let response = analyzer().analyze(&batch(&["-0.123456"])).unwrap();
        assert_relative_eq!(response.details[0].confidence, 12.35);
    }

    #[test]
    fn counts_plus_errors_equal_total() {
        let response = analyzer()
            .analyze(&batch(&["0.5", "boom", "-0.5", "boom", "0.0"]))
            .unwrap();
        let summary = &response.summary;
        let errors = response
            .sentiments
            .iter()
            .filter(|s| **s == Sentiment::Error)
            .count();
        assert_eq!(
            summary.positive_count + summary.negative_count + summary.neutral_count + errors,
            5
        );
    }

    #[test]
    fn analysis_is_deterministic() {
        let input = batch(&["0.4", "-0.2", "boom"]);
        let first = analyzer().analyze(&input).unwrap();
        let second = analyzer().analyze(&input).unwrap();
        assert_eq!(first.sentiments, second.sentiments);
        assert_eq!(
            first.summary.average_compound_score,
            second.summary.average_compound_score
        );
    }
}
