//! Polarity scoring behind a trait seam.
//!
//! The daemon only depends on [`PolarityScorer`]; the concrete
//! [`LexiconScorer`] is a VADER-style rule/lexicon scorer. Any scorer
//! returning a compound score in [-1, 1] satisfies the contract.

use crate::lexicon::{
    BOOSTERS, CAPS_SCALAR, EXCLAMATION_SCALAR, LEXICON, NEGATIONS, NEGATION_SCALAR, NORM_ALPHA,
};
use anyhow::Result;
use sentiment_common::PolarityScores;

/// Stateless text-to-polarity scorer, shared read-only across requests.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<PolarityScores>;
}

/// Rule-based lexicon scorer.
///
/// Tokenizes on whitespace, looks up word valences, applies booster,
/// negation and emphasis heuristics, then normalizes the raw sum into
/// the [-1, 1] compound score. Never fails on any input.
#[derive(Debug, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    fn score_text(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        let cap_diff = has_caps_differential(&tokens);

        let mut valences = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();

            // Boosters and negations modify neighbours, never score themselves.
            if BOOSTERS.contains_key(lower.as_str()) || is_negation(&lower) {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = LEXICON.get(lower.as_str()) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if cap_diff && is_all_caps(token) {
                valence += CAPS_SCALAR * valence.signum();
            }

            let mut negated = false;
            for back in 1..=3usize {
                if back > i {
                    break;
                }
                let prev = tokens[i - back].to_lowercase();
                if let Some(&boost) = BOOSTERS.get(prev.as_str()) {
                    let scaled = match back {
                        1 => boost,
                        2 => boost * 0.95,
                        _ => boost * 0.9,
                    };
                    valence += scaled * valence.signum();
                }
                if is_negation(&prev) {
                    negated = true;
                }
            }
            if negated {
                valence *= NEGATION_SCALAR;
            }
            valences.push(valence);
        }

        let punct = exclamation_emphasis(text) + question_emphasis(text);
        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += punct;
        } else if sum < 0.0 {
            sum -= punct;
        }
        let compound = round_to(normalize(sum), 4);

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for v in &valences {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += punct;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punct;
        }

        let mass = pos_sum + neg_sum.abs() + neu_count;
        if mass > 0.0 {
            PolarityScores {
                pos: round_to(pos_sum.abs() / mass, 3),
                neg: round_to(neg_sum.abs() / mass, 3),
                neu: round_to(neu_count / mass, 3),
                compound,
            }
        } else {
            PolarityScores::zeroed()
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<PolarityScores> {
        Ok(self.score_text(text))
    }
}

/// Whitespace tokens with edge punctuation trimmed; internal
/// apostrophes survive so contractions keep their "n't" suffix.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_negation(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.ends_with("n't")
}

fn is_all_caps(token: &str) -> bool {
    let mut has_alpha = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// True when some but not all alphabetic tokens shout.
fn has_caps_differential(tokens: &[String]) -> bool {
    let alpha = tokens.iter().filter(|t| t.chars().any(char::is_alphabetic)).count();
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < alpha
}

fn exclamation_emphasis(text: &str) -> f64 {
    let count = text.matches('!').count().min(4);
    count as f64 * EXCLAMATION_SCALAR
}

fn question_emphasis(text: &str) -> f64 {
    let count = text.matches('?').count();
    match count {
        0 | 1 => 0.0,
        2..=3 => count as f64 * 0.18,
        _ => 0.96,
    }
}

fn normalize(sum: f64) -> f64 {
    let norm = sum / (sum * sum + NORM_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
