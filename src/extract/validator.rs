//! Aspect validation.
//!
//! An ordered rejection pipeline: the first check that matches rejects the
//! candidate, and the order matters because earlier checks are cheaper and
//! safer. A candidate passing every check is a valid aspect.

use std::sync::Arc;

use regex::Regex;

use crate::config::RuleSet;
use crate::doc::PosTag;
use crate::error::{AbsaError, Result};
use crate::extract::normalizer::{strip_trailing_punct, AspectNormalizer};

/// Why a candidate was rejected. Used for debug logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    NonAlphanumeric,
    ShortNormalized,
    LikePhrase,
    Filler,
    BareIngredient,
    PersonalPhrase,
    Problematic,
    Comparative,
    TemporalPrefix,
    Interrogative,
    NumericExpression,
    BareAdjective,
    BlacklistedName,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::NonAlphanumeric => "non_alphanumeric",
            Self::ShortNormalized => "short_normalized",
            Self::LikePhrase => "like_phrase",
            Self::Filler => "filler",
            Self::BareIngredient => "bare_ingredient",
            Self::PersonalPhrase => "personal_phrase",
            Self::Problematic => "problematic",
            Self::Comparative => "comparative",
            Self::TemporalPrefix => "temporal_prefix",
            Self::Interrogative => "interrogative",
            Self::NumericExpression => "numeric_expression",
            Self::BareAdjective => "bare_adjective",
            Self::BlacklistedName => "blacklisted_name",
        }
    }
}

/// Accept/reject test for a raw candidate span. Pure in (rules, text, POS).
#[derive(Debug, Clone)]
pub struct AspectValidator {
    rules: Arc<RuleSet>,
    normalizer: AspectNormalizer,
    numeric_re: Regex,
    like_re: Regex,
}

impl AspectValidator {
    /// Compile the rule set's patterns. Fails only on an invalid pattern in
    /// an externally supplied rule set.
    pub fn new(rules: Arc<RuleSet>, normalizer: AspectNormalizer) -> Result<Self> {
        let numeric_re = Regex::new(&rules.numeric_pattern)
            .map_err(|e| AbsaError::Config(format!("numeric_pattern: {e}")))?;
        let like_re = Regex::new(&rules.like_suffix_pattern)
            .map_err(|e| AbsaError::Config(format!("like_suffix_pattern: {e}")))?;
        Ok(Self {
            rules,
            normalizer,
            numeric_re,
            like_re,
        })
    }

    /// Whether the candidate passes every check.
    pub fn is_valid(&self, text: &str, root_pos: PosTag) -> bool {
        self.check(text, root_pos).is_none()
    }

    /// Run the rejection pipeline; `None` means valid.
    pub fn check(&self, text: &str, root_pos: PosTag) -> Option<Rejection> {
        let lowered = text.trim().to_lowercase();

        // Pure-punctuation first: stripping trailing punctuation would empty
        // these and misreport them as too short.
        if !lowered.is_empty()
            && lowered
                .chars()
                .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            return Some(Rejection::NonAlphanumeric);
        }
        let stripped = strip_trailing_punct(&lowered);
        if stripped.trim().len() <= 2 {
            return Some(Rejection::TooShort);
        }

        let norm = self.normalizer.normalize(&lowered);
        if norm.len() <= 2 {
            return Some(Rejection::ShortNormalized);
        }
        if self.like_re.is_match(&norm) {
            return Some(Rejection::LikePhrase);
        }
        if self.rules.filler_terms.contains(&norm) {
            return Some(Rejection::Filler);
        }
        if self.rules.ingredient_terms.contains(&norm) {
            return Some(Rejection::BareIngredient);
        }
        if self
            .rules
            .personal_prefixes
            .iter()
            .any(|p| norm.starts_with(p.as_str()))
            || norm.starts_with("the ")
            || norm.starts_with("such a ")
        {
            return Some(Rejection::PersonalPhrase);
        }
        if self
            .rules
            .problematic_substrings
            .iter()
            .any(|s| norm.contains(s.as_str()))
        {
            return Some(Rejection::Problematic);
        }
        if self
            .rules
            .comparative_markers
            .iter()
            .any(|m| norm.contains(m.as_str()))
        {
            return Some(Rejection::Comparative);
        }
        if self
            .rules
            .temporal_degree_prefixes
            .iter()
            .any(|p| norm.starts_with(p.as_str()))
        {
            return Some(Rejection::TemporalPrefix);
        }
        if norm.starts_with("what") {
            return Some(Rejection::Interrogative);
        }
        if self.numeric_re.is_match(&norm) {
            return Some(Rejection::NumericExpression);
        }
        if root_pos == PosTag::Adjective && !norm.contains(' ') {
            return Some(Rejection::BareAdjective);
        }
        if root_pos == PosTag::ProperNoun && self.rules.proper_noun_blacklist.contains(&norm) {
            return Some(Rejection::BlacklistedName);
        }

        None
    }
}
