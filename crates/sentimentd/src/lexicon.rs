//! Static valence tables for the lexicon scorer.
//!
//! Valences sit on the same ±4 scale VADER uses. The table is scoped to
//! words that carry real polarity in product feedback; bland filler
//! ("fine", "ok") is deliberately absent so it classifies as neutral.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Magnitude shift applied by an intensity booster one token back.
/// Two and three tokens back are scaled by 0.95 and 0.9.
pub const BOOST_SCALAR: f64 = 0.293;

/// Factor applied when a sentiment word sits in a negation window.
pub const NEGATION_SCALAR: f64 = -0.74;

/// Magnitude shift for an ALL-CAPS sentiment word in mixed-case text.
pub const CAPS_SCALAR: f64 = 0.733;

/// Per-`!` emphasis added to the raw sum, capped at four marks.
pub const EXCLAMATION_SCALAR: f64 = 0.292;

/// Normalization constant for the compound score.
pub const NORM_ALPHA: f64 = 15.0;

/// Word valences.
pub static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("adore", 3.2),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("beautiful", 2.9),
        ("best", 3.2),
        ("better", 1.9),
        ("brilliant", 2.8),
        ("delight", 2.9),
        ("delighted", 3.1),
        ("easy", 1.9),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("excellent", 2.7),
        ("fantastic", 2.6),
        ("favorite", 2.0),
        ("glad", 2.0),
        ("good", 1.9),
        ("great", 3.1),
        ("happy", 2.7),
        ("helpful", 1.8),
        ("impressed", 2.2),
        ("impressive", 2.3),
        ("like", 1.5),
        ("liked", 1.6),
        ("likes", 1.6),
        ("love", 3.2),
        ("loved", 2.9),
        ("loves", 3.0),
        ("nice", 1.8),
        ("outstanding", 3.1),
        ("perfect", 2.7),
        ("pleasant", 2.3),
        ("pleased", 2.1),
        ("recommend", 1.6),
        ("recommended", 1.6),
        ("reliable", 1.9),
        ("satisfied", 1.9),
        ("smooth", 1.2),
        ("superb", 3.1),
        ("terrific", 2.9),
        ("thank", 1.7),
        ("thanks", 1.9),
        ("useful", 1.9),
        ("win", 2.8),
        ("winner", 2.8),
        ("wonderful", 2.7),
        // negative
        ("angry", -2.3),
        ("annoying", -1.8),
        ("awful", -2.0),
        ("bad", -2.5),
        ("broken", -1.6),
        ("bug", -1.4),
        ("buggy", -1.7),
        ("confusing", -1.3),
        ("crash", -1.9),
        ("crashes", -1.9),
        ("disappointed", -2.0),
        ("disappointing", -2.1),
        ("disaster", -2.4),
        ("dislike", -1.6),
        ("dreadful", -2.6),
        ("fail", -2.3),
        ("failed", -2.3),
        ("fails", -2.2),
        ("frustrating", -2.0),
        ("garbage", -2.2),
        ("hate", -2.7),
        ("hated", -2.9),
        ("hates", -2.6),
        ("horrible", -2.5),
        ("lousy", -2.0),
        ("mediocre", -0.9),
        ("mess", -1.6),
        ("nasty", -2.5),
        ("pathetic", -2.5),
        ("poor", -1.9),
        ("problem", -1.6),
        ("problems", -1.7),
        ("sad", -2.1),
        ("slow", -1.2),
        ("terrible", -2.1),
        ("trash", -2.0),
        ("ugly", -2.3),
        ("unhappy", -2.0),
        ("unreliable", -1.8),
        ("unusable", -2.3),
        ("useless", -1.9),
        ("waste", -1.8),
        ("worse", -2.1),
        ("worst", -3.1),
        ("wrong", -1.6),
    ]
    .into_iter()
    .collect()
});

/// Intensity boosters and dampeners. Positive values amplify the next
/// sentiment word's magnitude, negative values dampen it.
pub static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("absolutely", BOOST_SCALAR),
        ("completely", BOOST_SCALAR),
        ("considerably", BOOST_SCALAR),
        ("decidedly", BOOST_SCALAR),
        ("deeply", BOOST_SCALAR),
        ("especially", BOOST_SCALAR),
        ("exceptionally", BOOST_SCALAR),
        ("extremely", BOOST_SCALAR),
        ("greatly", BOOST_SCALAR),
        ("highly", BOOST_SCALAR),
        ("hugely", BOOST_SCALAR),
        ("incredibly", BOOST_SCALAR),
        ("really", BOOST_SCALAR),
        ("remarkably", BOOST_SCALAR),
        ("so", BOOST_SCALAR),
        ("thoroughly", BOOST_SCALAR),
        ("totally", BOOST_SCALAR),
        ("tremendously", BOOST_SCALAR),
        ("unbelievably", BOOST_SCALAR),
        ("utterly", BOOST_SCALAR),
        ("very", BOOST_SCALAR),
        ("almost", -BOOST_SCALAR),
        ("barely", -BOOST_SCALAR),
        ("hardly", -BOOST_SCALAR),
        ("kinda", -BOOST_SCALAR),
        ("less", -BOOST_SCALAR),
        ("marginally", -BOOST_SCALAR),
        ("occasionally", -BOOST_SCALAR),
        ("partly", -BOOST_SCALAR),
        ("scarcely", -BOOST_SCALAR),
        ("slightly", -BOOST_SCALAR),
        ("somewhat", -BOOST_SCALAR),
        ("sorta", -BOOST_SCALAR),
    ]
    .into_iter()
    .collect()
});

/// Negation words. Contracted forms ("don't", "isn't") are matched by
/// suffix in the scorer, so only bare forms are listed.
pub static NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "neither", "never", "no", "none", "nope", "nor", "not", "nothing",
    "nowhere", "without",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bland_filler_is_absent() {
        for word in ["fine", "ok", "okay", "it", "is"] {
            assert!(!LEXICON.contains_key(word), "{word} should not carry valence");
        }
    }

    #[test]
    fn valences_stay_on_the_vader_scale() {
        for (word, valence) in LEXICON.iter() {
            assert!(valence.abs() <= 4.0, "{word} out of range: {valence}");
            assert!(*valence != 0.0, "{word} has zero valence");
        }
    }

    #[test]
    fn booster_words_never_carry_their_own_valence() {
        for word in BOOSTERS.keys() {
            assert!(!LEXICON.contains_key(word), "{word} is both booster and lexicon entry");
        }
    }
}
