//! Core value types shared across analyzers.
//!
//! [`AspectSentiment`] is the public output contract: every analyzer backend
//! (lexicon, transformer, prompted) produces an ordered list of these.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// User-facing name used in JSON and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Mirror polarity: positive ↔ negative, neutral unchanged.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Neutral => Self::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One aspect–sentiment record in an analysis result.
///
/// Immutable value type. `aspect` is the normalized phrase with source
/// casing preserved; `span` (when present) is the byte range of the
/// underlying span in the *cleaned* input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSentiment {
    pub aspect: String,
    pub sentiment: Sentiment,
    /// Always in `[0, 1]`.
    pub confidence: f64,
    /// `(start, end)` byte offsets into the cleaned input, if known.
    #[serde(default)]
    pub span: Option<(usize, usize)>,
}

impl AspectSentiment {
    pub fn new(
        aspect: impl Into<String>,
        sentiment: Sentiment,
        confidence: f64,
        span: Option<(usize, usize)>,
    ) -> Self {
        Self {
            aspect: aspect.into(),
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
            span,
        }
    }
}

impl fmt::Display for AspectSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aspect: '{}' -> {} (confidence: {:.2})",
            self.aspect,
            self.sentiment.as_str().to_uppercase(),
            self.confidence
        )
    }
}

/// Polarity scores returned by a lexicon scorer for a text span.
///
/// `compound` is the single scalar estimate in `[-1, 1]` the pipeline
/// classifies on; the positive/negative/neutral proportions are carried for
/// scorers that report them but are not consumed by the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub compound: f64,
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub negative: f64,
    #[serde(default)]
    pub neutral: f64,
}

impl PolarityScores {
    /// Build from a compound score alone.
    pub fn from_compound(compound: f64) -> Self {
        Self {
            compound: compound.clamp(-1.0, 1.0),
            ..Self::default()
        }
    }
}

/// Output of an aspect-level transformer classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: Sentiment,
    /// Class probability in `[0, 1]`.
    pub score: f64,
}
