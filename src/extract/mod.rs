//! Aspect extraction pipeline.
//!
//! Extraction is a fixed sequence over a parsed document: candidate
//! generation, dedup on normalized form, then coordination merging (which
//! dedups again). The stages share one [`RuleSet`] so word lists and
//! thresholds stay consistent across them.

pub mod candidates;
pub mod dedup;
pub mod merge;
pub mod normalizer;
pub mod validator;

pub use candidates::{AspectCandidate, CandidateExtractor};
pub use dedup::{dedup_by_key, dedup_candidates};
pub use merge::CoordinationMerger;
pub use normalizer::AspectNormalizer;
pub use validator::{AspectValidator, Rejection};

use std::sync::Arc;

use tracing::debug;

use crate::config::RuleSet;
use crate::doc::{Document, Span};
use crate::error::Result;

/// The full extraction chain, shared by every analyzer backend.
#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    normalizer: AspectNormalizer,
    extractor: CandidateExtractor,
    merger: CoordinationMerger,
}

impl ExtractionPipeline {
    /// Errors only if a rule pattern fails to compile.
    pub fn new(rules: Arc<RuleSet>) -> Result<Self> {
        let normalizer = AspectNormalizer::new(rules.clone());
        let validator = AspectValidator::new(rules.clone(), normalizer.clone())?;
        let extractor = CandidateExtractor::new(rules.clone(), validator, normalizer.clone());
        let merger = CoordinationMerger::new(rules, normalizer.clone());
        Ok(Self {
            normalizer,
            extractor,
            merger,
        })
    }

    /// Distinct, merged aspect candidates in order of discovery.
    pub fn aspects(&self, doc: &Document) -> Vec<AspectCandidate> {
        let raw = self.extractor.extract(doc);
        let raw_count = raw.len();
        let merged = self.merger.merge(dedup_candidates(raw), doc);
        debug!(
            raw = raw_count,
            merged = merged.len(),
            "extraction complete"
        );
        merged
    }

    pub fn normalizer(&self) -> &AspectNormalizer {
        &self.normalizer
    }

    /// Byte range of the tokens whose words survive normalization, so a
    /// record's span lines up with its aspect text (the candidate span may
    /// still cover a stripped article or modifier). Falls back to the full
    /// candidate span when the normalized words cannot be aligned to tokens.
    pub fn aspect_span(&self, doc: &Document, span: &Span, norm: &str) -> (usize, usize) {
        let norm_words: Vec<&str> = norm.split(' ').filter(|w| !w.is_empty()).collect();
        let end_tok = span.end_tok.min(doc.len());
        let toks = &doc.tokens()[span.start_tok.min(end_tok)..end_tok];
        let n = norm_words.len();
        if n > 0 && n <= toks.len() {
            for start in 0..=(toks.len() - n) {
                let window = &toks[start..start + n];
                if window
                    .iter()
                    .zip(&norm_words)
                    .all(|(t, w)| normalizer::clean_word(&t.text).to_lowercase() == **w)
                {
                    return (window[0].start, window[n - 1].end);
                }
            }
        }
        (span.start_char, span.end_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{DepLabel, PosTag, Token};

    fn pipeline() -> ExtractionPipeline {
        ExtractionPipeline::new(Arc::new(RuleSet::default())).unwrap()
    }

    fn tok(
        text: &str,
        pos: PosTag,
        dep: DepLabel,
        start: usize,
        idx: usize,
        head: usize,
    ) -> Token {
        Token::new(text, text, pos, dep, start, start + text.len(), 0, idx, head)
    }

    #[test]
    fn test_end_to_end_chunk_to_aspect() {
        let tokens = vec![
            tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
            tok("pizza", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
            tok("was", PosTag::Verb, DepLabel::Root, 10, 2, 2),
            tok("delicious", PosTag::Adjective, DepLabel::Acomp, 14, 3, 2),
        ];
        let chunks = vec![Span::new(0, 2, 1, 0, 9)];
        let doc = Document::new("The pizza was delicious", tokens, chunks);
        let aspects = pipeline().aspects(&doc);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].norm, "pizza");
    }

    #[test]
    fn test_no_duplicate_norms_in_output() {
        // Two chunks over distinct mentions of the same noun.
        let tokens = vec![
            tok("pizza", PosTag::Noun, DepLabel::Nsubj, 0, 0, 1),
            tok("beats", PosTag::Verb, DepLabel::Root, 6, 1, 1),
            tok("pizza", PosTag::Noun, DepLabel::Dobj, 12, 2, 1),
        ];
        let chunks = vec![Span::new(0, 1, 0, 0, 5), Span::new(2, 3, 2, 12, 17)];
        let doc = Document::new("pizza beats pizza", tokens, chunks);
        let aspects = pipeline().aspects(&doc);
        assert_eq!(aspects.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("", vec![], vec![]);
        assert!(pipeline().aspects(&doc).is_empty());
    }

    #[test]
    fn test_aspect_span_narrows_to_surviving_words() {
        // The candidate span covers "The pizza" but the article does not
        // survive normalization; the recorded span should start at "pizza".
        let tokens = vec![
            tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
            tok("pizza", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
            tok("was", PosTag::Verb, DepLabel::Root, 10, 2, 2),
            tok("delicious", PosTag::Adjective, DepLabel::Acomp, 14, 3, 2),
        ];
        let chunks = vec![Span::new(0, 2, 1, 0, 9)];
        let doc = Document::new("The pizza was delicious", tokens, chunks);
        let p = pipeline();
        let aspects = p.aspects(&doc);
        assert_eq!(
            p.aspect_span(&doc, &aspects[0].span, &aspects[0].norm),
            (4, 9)
        );
    }

    #[test]
    fn test_aspect_span_falls_back_to_candidate_span() {
        let tokens = vec![tok("pizza", PosTag::Noun, DepLabel::Root, 0, 0, 0)];
        let doc = Document::new("pizza", tokens, vec![]);
        let span = Span::new(0, 1, 0, 0, 5);
        // A norm that matches no token window keeps the candidate offsets.
        assert_eq!(pipeline().aspect_span(&doc, &span, "calzone"), (0, 5));
    }
}
