//! Lexicon-backed analyzer.
//!
//! The reference backend: extraction pipeline plus a valence lexicon. For
//! each aspect the opinion context is scored, the sign is flipped inside a
//! negation scope, and the compound score is mapped onto a label with
//! confidence equal to its magnitude.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analyzer::{clean_text, Analyzer, Parser};
use crate::config::RuleSet;
use crate::error::Result;
use crate::extract::ExtractionPipeline;
use crate::sentiment::{LexiconScorer, NegationDetector, OpinionAttacher, SentimentScorer};
use crate::types::AspectSentiment;

pub struct LexiconAnalyzer<P, S> {
    parser: P,
    scorer: S,
    pipeline: ExtractionPipeline,
    opinions: OpinionAttacher,
    negation: NegationDetector,
    sentiment: SentimentScorer,
}

impl<P: Parser, S: LexiconScorer> LexiconAnalyzer<P, S> {
    /// Errors only if a rule pattern fails to compile.
    pub fn new(parser: P, scorer: S, rules: Arc<RuleSet>) -> Result<Self> {
        let pipeline = ExtractionPipeline::new(rules.clone())?;
        let negation = NegationDetector::new(rules.clone());
        let sentiment = SentimentScorer::new(rules.thresholds.neutral_band);
        Ok(Self {
            parser,
            scorer,
            pipeline,
            opinions: OpinionAttacher,
            negation,
            sentiment,
        })
    }

    /// Fallible analysis: parse and scorer errors surface to the caller.
    pub fn try_analyze(&self, text: &str) -> Result<Vec<AspectSentiment>> {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let doc = self.parser.parse(&cleaned)?;
        let mut results = Vec::new();
        for candidate in self.pipeline.aspects(&doc) {
            let context = self.opinions.context(&doc, &candidate.span);
            let scores = self.scorer.score(&context)?;
            let negated = self.negation.is_negated(&doc, candidate.span.root_tok);
            let (sentiment, confidence) = self.sentiment.classify(scores.compound, negated);
            let aspect = self
                .pipeline
                .normalizer()
                .normalize_cased(doc.span_text(&candidate.span));
            debug!(
                aspect = aspect.as_str(),
                compound = scores.compound,
                negated,
                "aspect scored"
            );
            let span = self
                .pipeline
                .aspect_span(&doc, &candidate.span, &candidate.norm);
            results.push(AspectSentiment::new(aspect, sentiment, confidence, Some(span)));
        }
        Ok(results)
    }
}

impl<P: Parser, S: LexiconScorer> Analyzer for LexiconAnalyzer<P, S> {
    fn analyze(&self, text: &str) -> Vec<AspectSentiment> {
        match self.try_analyze(text) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "lexicon analysis failed");
                Vec::new()
            }
        }
    }
}
