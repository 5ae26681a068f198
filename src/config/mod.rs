//! Rule-set configuration.
//!
//! [`RuleSet`] bundles every stoplist, word list, pattern, and numeric
//! threshold the pipeline consults. It is loaded once (defaults or JSON) and
//! read-only for the process lifetime; all pipeline stages are pure functions
//! of their input and this structure.
//!
//! # JSON shape
//!
//! Every field is optional — absent fields keep the built-in defaults:
//!
//! ```json
//! {
//!   "filler_terms": ["thing", "stuff"],
//!   "collective_roles": ["service", "staff"],
//!   "thresholds": { "neutral_band": 0.05, "max_coordination_gap": 10 }
//! }
//! ```

mod stoplists;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::{AbsaError, Result};

/// Numeric knobs for the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Compound scores within `±neutral_band` (exclusive) classify neutral.
    pub neutral_band: f64,
    /// Maximum raw-text gap (in bytes) between two candidates for a
    /// coordination merge to be considered.
    pub max_coordination_gap: usize,
    /// How many tokens to look back when expanding a candidate with
    /// preceding size/quality modifiers.
    pub modifier_lookback: usize,
    /// How many tokens before an aspect root to scan for negation words.
    pub negation_window: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            neutral_band: 0.05,
            max_coordination_gap: 10,
            modifier_lookback: 3,
            negation_window: 4,
        }
    }
}

/// The full rule set: stoplists, rewrite word lists, patterns, thresholds.
///
/// Unordered membership tests use `FxHashSet`; prefix lists that are matched
/// longest-first stay as ordered `Vec`s.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub filler_terms: FxHashSet<String>,
    pub ingredient_terms: FxHashSet<String>,
    pub personal_prefixes: Vec<String>,
    pub problematic_substrings: Vec<String>,
    pub comparative_markers: Vec<String>,
    pub temporal_degree_prefixes: Vec<String>,
    pub proper_noun_blacklist: FxHashSet<String>,
    pub collective_roles: FxHashSet<String>,

    // Normalizer rewrite lists, in stage order.
    pub leading_modifiers: Vec<String>,
    pub articles: Vec<String>,
    pub possessives: Vec<String>,
    pub paired_intensifiers: Vec<String>,
    pub sentiment_adjectives: Vec<String>,
    pub single_intensifiers: Vec<String>,
    pub temporal_descriptors: Vec<String>,
    pub size_category_prefixes: Vec<String>,
    pub protected_phrases: FxHashSet<String>,
    pub business_names: Vec<String>,
    pub origin_descriptors: Vec<String>,
    pub production_descriptors: Vec<String>,
    pub price_channel_prefixes: Vec<String>,

    // Extractor data.
    pub generic_aspect_terms: FxHashSet<String>,
    pub passing_mention_words: FxHashSet<String>,
    pub size_modifiers: FxHashSet<String>,

    pub negation_words: FxHashSet<String>,

    /// Regex source for numeric/time/price/unit rejection.
    pub numeric_pattern: String,
    /// Regex source for "-like taste" rejection.
    pub like_suffix_pattern: String,

    pub thresholds: Thresholds,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            filler_terms: set(stoplists::FILLER_TERMS),
            ingredient_terms: set(stoplists::INGREDIENT_TERMS),
            personal_prefixes: list(stoplists::PERSONAL_PREFIXES),
            problematic_substrings: list(stoplists::PROBLEMATIC_SUBSTRINGS),
            comparative_markers: list(stoplists::COMPARATIVE_MARKERS),
            temporal_degree_prefixes: list(stoplists::TEMPORAL_DEGREE_PREFIXES),
            proper_noun_blacklist: set(stoplists::PROPER_NOUN_BLACKLIST),
            collective_roles: set(stoplists::COLLECTIVE_ROLES),
            leading_modifiers: list(stoplists::LEADING_MODIFIERS),
            articles: list(stoplists::ARTICLES),
            possessives: list(stoplists::POSSESSIVES),
            paired_intensifiers: list(stoplists::PAIRED_INTENSIFIERS),
            sentiment_adjectives: list(stoplists::SENTIMENT_ADJECTIVES),
            single_intensifiers: list(stoplists::SINGLE_INTENSIFIERS),
            temporal_descriptors: list(stoplists::TEMPORAL_DESCRIPTORS),
            size_category_prefixes: list(stoplists::SIZE_CATEGORY_PREFIXES),
            protected_phrases: set(stoplists::PROTECTED_PHRASES),
            business_names: list(stoplists::BUSINESS_NAMES),
            origin_descriptors: list(stoplists::ORIGIN_DESCRIPTORS),
            production_descriptors: list(stoplists::PRODUCTION_DESCRIPTORS),
            price_channel_prefixes: list(stoplists::PRICE_CHANNEL_PREFIXES),
            generic_aspect_terms: set(stoplists::GENERIC_ASPECT_TERMS),
            passing_mention_words: set(stoplists::PASSING_MENTION_WORDS),
            size_modifiers: set(stoplists::SIZE_MODIFIERS),
            negation_words: set(stoplists::NEGATION_WORDS),
            numeric_pattern: stoplists::NUMERIC_PATTERN.to_string(),
            like_suffix_pattern: stoplists::LIKE_SUFFIX_PATTERN.to_string(),
            thresholds: Thresholds::default(),
        }
    }
}

impl RuleSet {
    /// Load a rule set from JSON. Absent fields keep the built-in defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AbsaError::Config(e.to_string()))
    }

    /// Check whether `word` is a negation marker.
    pub fn is_negation_word(&self, word: &str) -> bool {
        self.negation_words.contains(word)
    }
}

fn set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
