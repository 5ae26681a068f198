//! Sentiment scoring for extracted aspects.
//!
//! The pieces compose left to right: [`OpinionAttacher`] picks the words to
//! score, a [`LexiconScorer`] turns them into a compound polarity,
//! [`NegationDetector`] decides whether to flip the sign, and
//! [`SentimentScorer`] maps the final score onto a label.

pub mod lexicon;
pub mod negation;
pub mod opinion;

pub use lexicon::DefaultLexicon;
pub use negation::NegationDetector;
pub use opinion::OpinionAttacher;

use crate::error::Result;
use crate::types::{PolarityScores, Sentiment};

/// Polarity scoring over a short text span.
///
/// Implementations must be deterministic: the same text always yields the
/// same scores.
pub trait LexiconScorer {
    fn score(&self, text: &str) -> Result<PolarityScores>;
}

impl<S: LexiconScorer + ?Sized> LexiconScorer for &S {
    fn score(&self, text: &str) -> Result<PolarityScores> {
        (**self).score(text)
    }
}

/// Maps a compound polarity score onto a sentiment label.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer {
    neutral_band: f64,
}

impl SentimentScorer {
    pub fn new(neutral_band: f64) -> Self {
        Self { neutral_band }
    }

    /// Classify a compound score, flipping its sign first when the aspect
    /// sits in a negation scope. Confidence is the magnitude of the final
    /// score, so scores inside the neutral band yield low-confidence
    /// neutrals rather than being dropped.
    pub fn classify(&self, compound: f64, negated: bool) -> (Sentiment, f64) {
        let score = if negated { -compound } else { compound };
        let sentiment = if score >= self.neutral_band {
            Sentiment::Positive
        } else if score <= -self.neutral_band {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        (sentiment, score.abs().min(1.0))
    }
}
