//! Built-in valence lexicon.
//!
//! A small rule-based scorer over a word-to-valence table. Raw valences live
//! on a roughly [-4, 4] scale and the compound score squashes their sum into
//! [-1, 1], so a single strong word lands well outside the neutral band while
//! a lukewarm one stays near it.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::sentiment::LexiconScorer;
use crate::types::PolarityScores;

/// Valence entries bundled with the crate. Scores follow the usual
/// social-media lexicon scale where +/-4 is the extreme.
const DEFAULT_VALENCES: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("best", 3.2),
    ("bland", -1.1),
    ("cozy", 1.5),
    ("delicious", 2.7),
    ("delightful", 2.8),
    ("disappointing", -2.2),
    ("disgusting", -3.0),
    ("dry", -1.1),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("flavorful", 2.0),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("good", 1.9),
    ("great", 3.1),
    ("greasy", -1.2),
    ("horrible", -2.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("mediocre", -0.9),
    ("nice", 1.8),
    ("okay", 0.9),
    ("overpriced", -1.9),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("poor", -2.1),
    ("rude", -2.0),
    ("slow", -1.2),
    ("soggy", -1.3),
    ("stale", -1.5),
    ("tasty", 1.9),
    ("terrible", -2.1),
    ("wonderful", 2.7),
    ("worst", -3.1),
];

// Normalization constant for the compound squash, sum / sqrt(sum^2 + alpha).
const ALPHA: f64 = 15.0;

/// Dependency-free scorer backed by [`DEFAULT_VALENCES`].
#[derive(Debug, Clone)]
pub struct DefaultLexicon {
    valences: FxHashMap<String, f64>,
}

impl Default for DefaultLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultLexicon {
    pub fn new() -> Self {
        let valences = DEFAULT_VALENCES
            .iter()
            .map(|&(w, v)| (w.to_string(), v))
            .collect();
        Self { valences }
    }

    /// Add or override a single valence entry.
    pub fn with_valence(mut self, word: &str, valence: f64) -> Self {
        self.valences.insert(word.to_lowercase(), valence);
        self
    }

    fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }
}

impl LexiconScorer for DefaultLexicon {
    fn score(&self, text: &str) -> Result<PolarityScores> {
        let mut sum = 0.0;
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neutral = 0usize;

        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
        {
            match self.valence(&word.to_lowercase()) {
                Some(v) if v > 0.0 => {
                    sum += v;
                    pos_sum += v;
                }
                Some(v) if v < 0.0 => {
                    sum += v;
                    neg_sum += v.abs();
                }
                _ => neutral += 1,
            }
        }

        let compound = sum / (sum * sum + ALPHA).sqrt();
        let total = pos_sum + neg_sum + neutral as f64;
        let (positive, negative, neutral) = if total > 0.0 {
            (pos_sum / total, neg_sum / total, neutral as f64 / total)
        } else {
            (0.0, 0.0, 0.0)
        };

        Ok(PolarityScores {
            compound: compound.clamp(-1.0, 1.0),
            positive,
            negative,
            neutral,
        })
    }
}
