//! Candidate extraction.
//!
//! Three passes over a parsed document, in priority order: noun chunks,
//! nouns immediately before a coordinator (the first half of a coordinated
//! pair that chunking may have missed), then remaining standalone nouns not
//! covered by an accepted span. The seen-set of normalized forms is scoped
//! to one call; nothing is shared across documents.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::config::RuleSet;
use crate::doc::{Document, PosTag, Span};
use crate::extract::normalizer::AspectNormalizer;
use crate::extract::validator::AspectValidator;

/// A raw aspect candidate: a span plus its normalized lowercase form.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectCandidate {
    pub span: Span,
    pub norm: String,
}

/// Produces raw aspect candidates from a parsed document.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    rules: Arc<RuleSet>,
    validator: AspectValidator,
    normalizer: AspectNormalizer,
}

impl CandidateExtractor {
    pub fn new(
        rules: Arc<RuleSet>,
        validator: AspectValidator,
        normalizer: AspectNormalizer,
    ) -> Self {
        Self {
            rules,
            validator,
            normalizer,
        }
    }

    /// Extract distinct candidates in order of discovery.
    pub fn extract(&self, doc: &Document) -> Vec<AspectCandidate> {
        let mut candidates: Vec<AspectCandidate> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        // Pass 1: noun chunks rooted at a noun.
        for chunk in doc.noun_chunks() {
            if !doc.root(chunk).pos.is_noun() {
                continue;
            }
            let text = doc.span_text(chunk);
            if let Some(rejection) = self.validator.check(text, doc.root(chunk).pos) {
                trace!(candidate = text, reason = rejection.as_str(), "chunk rejected");
                continue;
            }
            let expanded = self.expand_with_modifiers(doc, chunk);
            let norm = self.normalizer.normalize(doc.span_text(&expanded));
            if norm.is_empty() || norm.len() < 3 || seen.contains(&norm) {
                continue;
            }
            if self.is_passing_mention(doc, &expanded, &norm) {
                trace!(candidate = norm.as_str(), "generic term mentioned in passing");
                continue;
            }
            seen.insert(norm.clone());
            candidates.push(AspectCandidate {
                span: expanded,
                norm,
            });
        }

        // Pass 2: nouns immediately before a coordinator.
        for (idx, token) in doc.tokens().iter().enumerate() {
            if !token.pos.is_noun() || idx + 1 >= doc.len() {
                continue;
            }
            let next = doc.tokens()[idx + 1].lower();
            if next != "and" && next != "&" && next != "," {
                continue;
            }
            if covered(&candidates, idx) {
                continue;
            }
            self.try_accept_token(doc, idx, &mut candidates, &mut seen);
        }

        // Pass 3: standalone nouns not inside any accepted span.
        for (idx, token) in doc.tokens().iter().enumerate() {
            if !token.pos.is_noun() || covered(&candidates, idx) {
                continue;
            }
            self.try_accept_token(doc, idx, &mut candidates, &mut seen);
        }

        candidates
    }

    /// Validate/normalize/seen-gate a lone token and accept it if it passes.
    fn try_accept_token(
        &self,
        doc: &Document,
        idx: usize,
        candidates: &mut Vec<AspectCandidate>,
        seen: &mut FxHashSet<String>,
    ) {
        let token = &doc.tokens()[idx];
        if !self.validator.is_valid(&token.text, token.pos) {
            return;
        }
        let norm = self.normalizer.normalize(&token.text);
        if norm.is_empty() || norm.len() < 3 || seen.contains(&norm) {
            return;
        }
        seen.insert(norm.clone());
        candidates.push(AspectCandidate {
            span: Span::from_token(token),
            norm,
        });
    }

    /// Pull preceding size/quality modifiers into the span. The lookback
    /// resets on any token that is not a determiner, preposition, or
    /// punctuation, so unrelated words break the modifier run.
    fn expand_with_modifiers(&self, doc: &Document, chunk: &Span) -> Span {
        let lookback = self.rules.thresholds.modifier_lookback;
        let start = chunk.start_tok;
        let mut prefix: Vec<usize> = Vec::new();

        for idx in start.saturating_sub(lookback)..start {
            let token = &doc.tokens()[idx];
            if self.rules.size_modifiers.contains(&token.lower())
                || token.dep == crate::doc::DepLabel::Amod
            {
                prefix.push(idx);
            } else if !matches!(
                token.pos,
                PosTag::Determiner | PosTag::Preposition | PosTag::Punctuation
            ) {
                prefix.clear();
            }
        }

        match prefix.first() {
            Some(&first) => doc
                .span(first, chunk.end_tok, chunk.root_tok)
                .unwrap_or(*chunk),
            None => *chunk,
        }
    }

    /// Generic aspect terms ("ice cream", "boba", …) are skipped when the
    /// two preceding tokens suggest a passing mention ("a scoop of ice
    /// cream") rather than the reviewed subject.
    fn is_passing_mention(&self, doc: &Document, span: &Span, norm: &str) -> bool {
        if !self.rules.generic_aspect_terms.contains(norm) || span.start_tok == 0 {
            return false;
        }
        let from = span.start_tok.saturating_sub(2);
        doc.tokens()[from..span.start_tok]
            .iter()
            .any(|t| self.rules.passing_mention_words.contains(&t.lower()))
    }
}

fn covered(candidates: &[AspectCandidate], idx: usize) -> bool {
    candidates.iter().any(|c| c.span.contains_token(idx))
}
