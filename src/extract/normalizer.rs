//! Aspect normalization.
//!
//! [`AspectNormalizer::normalize`] canonicalizes a span's text to the
//! lowercase, modifier-stripped form used as the deduplication key. The
//! rewrite is a fixed sequence of stages (strip interrogative openers,
//! stacked leading modifiers, articles, possessives, intensifiers, temporal
//! and category descriptors, business names, trailing clauses, punctuation),
//! iterated until the text stops changing so the function is idempotent:
//! `normalize(normalize(x)) == normalize(x)`.
//!
//! [`AspectNormalizer::normalize_cased`] reconstructs the same word sequence
//! from the source span so output records preserve source casing.

use std::sync::Arc;

use crate::config::RuleSet;

/// Canonicalizes aspect text against a [`RuleSet`]. Pure in (text, rules).
#[derive(Debug, Clone)]
pub struct AspectNormalizer {
    rules: Arc<RuleSet>,
}

impl AspectNormalizer {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Canonical lowercase form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = collapse_whitespace(&text.trim().to_lowercase());

        // The stage sequence runs in a fixed order; the whole pass repeats
        // until a fixed point so stripping one layer (say, an article) lets
        // the next pass see the modifier it was hiding. Bounded: every pass
        // that changes the text strictly shortens it.
        loop {
            let before = current.clone();
            current = self.pass(current);
            if current == before {
                break;
            }
        }
        current
    }

    /// Same stripping as [`normalize`](Self::normalize), but the returned
    /// words carry the casing they had in `text`. Falls back to the
    /// lowercase form when the word sequence cannot be located (e.g. the
    /// normalizer rewrote internal whitespace).
    pub fn normalize_cased(&self, text: &str) -> String {
        let norm = self.normalize(text);
        if norm.is_empty() {
            return norm;
        }
        let norm_words: Vec<&str> = norm.split(' ').collect();
        let source_words: Vec<String> = collapse_whitespace(text.trim())
            .split(' ')
            .map(clean_word)
            .collect();

        let n = norm_words.len();
        if n <= source_words.len() {
            for start in 0..=(source_words.len() - n) {
                let window = &source_words[start..start + n];
                if window
                    .iter()
                    .zip(&norm_words)
                    .all(|(w, nw)| w.to_lowercase() == **nw)
                {
                    return window.join(" ");
                }
            }
        }
        norm
    }

    /// One ordered pass over all rewrite stages.
    fn pass(&self, mut text: String) -> String {
        let rules = &self.rules;

        text = strip_openers(&text);

        // Stacked leading modifiers, one word at a time to its own fixpoint.
        while let Some(rest) = strip_leading_word(&text, &rules.leading_modifiers) {
            text = rest;
        }

        if let Some(rest) = strip_leading_word(&text, &rules.articles) {
            text = rest;
        }
        if let Some(rest) = strip_leading_word(&text, &rules.possessives) {
            text = rest;
        }

        // Intensifier + sentiment adjective (two-token), then bare intensifier.
        text = self.strip_intensifier_adjective(text);
        if let Some(rest) = strip_leading_word(&text, &rules.single_intensifiers) {
            text = rest;
        }

        if let Some(rest) = strip_leading_word(&text, &rules.temporal_descriptors) {
            text = rest;
        }

        // Size/category prefixes, unless the whole text is a protected phrase.
        if !rules.protected_phrases.contains(text.as_str()) {
            if let Some(rest) = strip_leading_word(&text, &rules.size_category_prefixes) {
                text = rest;
            }
        }

        text = strip_business_name(&text, &rules.business_names);

        // Corporate/origin descriptors are kept when the aspect is a "place".
        if !text.ends_with("place") {
            if let Some(rest) = strip_leading_word(&text, &rules.origin_descriptors) {
                text = rest;
            }
        }
        if let Some(rest) = strip_leading_word(&text, &rules.production_descriptors) {
            text = rest;
        }
        if let Some(rest) = strip_leading_word(&text, &rules.price_channel_prefixes) {
            text = rest;
        }

        text = truncate_trailing_clause(&text);
        text = strip_trailing_punct(&text);
        text = strip_quotes(&text);
        collapse_whitespace(text.trim())
    }

    /// Remove a leading paired-intensifier + sentiment-adjective pair, but
    /// only when more text follows (a bare "really good" stays intact).
    fn strip_intensifier_adjective(&self, text: String) -> String {
        let rules = &self.rules;
        if let Some(after_intensifier) = strip_leading_word(&text, &rules.paired_intensifiers) {
            if let Some(rest) = strip_leading_word(&after_intensifier, &rules.sentiment_adjectives)
            {
                if !rest.is_empty() {
                    return rest;
                }
            }
        }
        text
    }
}

/// Strip "what a/what is/what's" openers plus the "fun"/"all in all" tics.
fn strip_openers(text: &str) -> String {
    for opener in ["what a ", "what is ", "what's "] {
        if let Some(rest) = text.strip_prefix(opener) {
            return rest.trim_start().to_string();
        }
    }
    if let Some(rest) = text.strip_prefix("all in all") {
        let rest = rest.trim_start_matches(',').trim_start();
        if !rest.is_empty() {
            return rest.to_string();
        }
    }
    text.to_string()
}

/// If `text` begins with one of `words` followed by whitespace, return the
/// remainder. Longest entry wins so "one of" beats "one".
fn strip_leading_word(text: &str, words: &[String]) -> Option<String> {
    let mut best: Option<&str> = None;
    for word in words {
        if text.len() > word.len()
            && text.starts_with(word.as_str())
            && text[word.len()..].starts_with(' ')
            && best.map_or(true, |b| word.len() > b.len())
        {
            best = Some(word);
        }
    }
    best.map(|w| text[w.len()..].trim_start().to_string())
}

/// Business names are stripped even when they are the whole text, leaving
/// an empty form the extractor will discard.
fn strip_business_name(text: &str, names: &[String]) -> String {
    for name in names {
        if text == name {
            return String::new();
        }
        if text.len() > name.len()
            && text.starts_with(name.as_str())
            && text[name.len()..].starts_with(' ')
        {
            return text[name.len()..].trim_start().to_string();
        }
    }
    text.to_string()
}

/// Truncate at a trailing "with …" or "for …" clause.
fn truncate_trailing_clause(text: &str) -> String {
    let mut cut = text.len();
    for marker in [" with ", " for "] {
        if let Some(pos) = text.find(marker) {
            cut = cut.min(pos);
        }
    }
    text[..cut].to_string()
}

/// Remove trailing characters that are neither alphanumeric nor whitespace.
pub(crate) fn strip_trailing_punct(text: &str) -> String {
    text.trim_end_matches(|c: char| !c.is_alphanumeric() && c != '_' && !c.is_whitespace())
        .to_string()
}

/// Remove one surrounding quote character from each end.
fn strip_quotes(text: &str) -> String {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    let text = text.strip_suffix(['"', '\'']).unwrap_or(text);
    text.to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Per-word cleanup mirroring the punctuation/quote stages, case preserved.
pub(crate) fn clean_word(word: &str) -> String {
    strip_quotes(&strip_trailing_punct(word))
}
