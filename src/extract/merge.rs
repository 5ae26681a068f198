//! Coordination merging.
//!
//! Adjacent candidates joined by a conjunction ("chocolate and vanilla ice
//! cream") fuse into one compound aspect, under three conditions: neither
//! side is a collective role ("staff and service" must stay separate), both
//! sides' normalized forms are contained in the merged form, and the merged
//! form is strictly longer than each side. When the merged text cannot be
//! mapped back onto a contiguous token range, both originals are kept —
//! a failed merge never drops a candidate.

use std::sync::Arc;

use tracing::trace;

use crate::config::RuleSet;
use crate::doc::Document;
use crate::extract::candidates::AspectCandidate;
use crate::extract::dedup::dedup_candidates;
use crate::extract::normalizer::AspectNormalizer;

/// Fuses conjunction-linked candidate pairs into compound aspects.
#[derive(Debug, Clone)]
pub struct CoordinationMerger {
    rules: Arc<RuleSet>,
    normalizer: AspectNormalizer,
}

impl CoordinationMerger {
    pub fn new(rules: Arc<RuleSet>, normalizer: AspectNormalizer) -> Self {
        Self { rules, normalizer }
    }

    /// Merge eligible adjacent pairs and dedup the result by normalized form.
    pub fn merge(&self, mut candidates: Vec<AspectCandidate>, doc: &Document) -> Vec<AspectCandidate> {
        if candidates.is_empty() {
            return candidates;
        }
        candidates.sort_by_key(|c| c.span.start_char);

        let mut merged: Vec<AspectCandidate> = Vec::with_capacity(candidates.len());
        let mut i = 0;
        while i < candidates.len() {
            if i + 1 < candidates.len() {
                if let Some(fused) = self.try_merge(&candidates[i], &candidates[i + 1], doc) {
                    trace!(aspect = fused.norm.as_str(), "merged coordinated pair");
                    merged.push(fused);
                    i += 2;
                    continue;
                }
            }
            merged.push(candidates[i].clone());
            i += 1;
        }

        dedup_candidates(merged)
    }

    fn try_merge(
        &self,
        left: &AspectCandidate,
        right: &AspectCandidate,
        doc: &Document,
    ) -> Option<AspectCandidate> {
        let text = doc.text();
        let (gap_start, gap_end) = (left.span.end_char, right.span.start_char);
        if gap_start >= gap_end || gap_end > text.len() {
            return None;
        }

        let gap = text[gap_start..gap_end].to_lowercase();
        if gap.len() >= self.rules.thresholds.max_coordination_gap || !has_conjunction(&gap) {
            return None;
        }

        // Collective roles are never absorbed into a coordination.
        if self.rules.collective_roles.contains(&left.norm)
            || self.rules.collective_roles.contains(&right.norm)
        {
            return None;
        }

        let fused_text = text[left.span.start_char..right.span.end_char].trim();
        let fused_norm = self.normalizer.normalize(fused_text);

        // Containment law: the compound must contain both halves and be
        // strictly longer than each.
        if !fused_norm.contains(&left.norm)
            || !fused_norm.contains(&right.norm)
            || fused_norm.len() <= left.norm.len().max(right.norm.len())
        {
            return None;
        }

        // Map character offsets back onto a contiguous token range; on
        // failure the caller keeps both originals unmerged.
        let span = self.reconstruct_span(doc, left.span.start_char, right.span.end_char)?;
        Some(AspectCandidate {
            span,
            norm: fused_norm,
        })
    }

    /// First token starting at or after `start`, through the last token
    /// ending at or before `end`, rooted at the right-hand candidate's side.
    fn reconstruct_span(
        &self,
        doc: &Document,
        start: usize,
        end: usize,
    ) -> Option<crate::doc::Span> {
        let mut token_start = None;
        let mut token_end = None;
        for (idx, tok) in doc.tokens().iter().enumerate() {
            if tok.start >= start && token_start.is_none() {
                token_start = Some(idx);
            }
            if tok.end <= end {
                token_end = Some(idx + 1);
            }
        }
        let (ts, te) = (token_start?, token_end?);
        if te <= ts {
            return None;
        }
        // Root at the final token of the compound, the phrase head in a
        // right-headed noun phrase.
        doc.span(ts, te, te - 1)
    }
}

/// Whole-word "and", or a comma/ampersand anywhere in the gap.
fn has_conjunction(gap: &str) -> bool {
    gap.contains(',')
        || gap.contains('&')
        || gap
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| w == "and")
}
