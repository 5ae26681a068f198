//! Classifier-backed analyzer.
//!
//! Reuses the exact extraction chain of the lexicon backend, but hands each
//! (sentence, aspect) pair to an external classifier instead of scoring an
//! opinion context. The classifier's class probability becomes the record's
//! confidence.

use std::sync::Arc;

use tracing::warn;

use crate::analyzer::{clean_text, Analyzer, Parser};
use crate::config::RuleSet;
use crate::error::Result;
use crate::extract::ExtractionPipeline;
use crate::types::{AspectSentiment, Classification};

/// Sentence-level classification of one aspect, supplied by the caller.
pub trait AspectClassifier {
    fn classify(&self, text: &str, aspect: &str) -> Result<Classification>;
}

impl<C: AspectClassifier + ?Sized> AspectClassifier for &C {
    fn classify(&self, text: &str, aspect: &str) -> Result<Classification> {
        (**self).classify(text, aspect)
    }
}

pub struct TransformerAnalyzer<P, C> {
    parser: P,
    classifier: C,
    pipeline: ExtractionPipeline,
}

impl<P: Parser, C: AspectClassifier> TransformerAnalyzer<P, C> {
    pub fn new(parser: P, classifier: C, rules: Arc<RuleSet>) -> Result<Self> {
        Ok(Self {
            parser,
            classifier,
            pipeline: ExtractionPipeline::new(rules)?,
        })
    }

    pub fn try_analyze(&self, text: &str) -> Result<Vec<AspectSentiment>> {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let doc = self.parser.parse(&cleaned)?;
        let mut results = Vec::new();
        for candidate in self.pipeline.aspects(&doc) {
            let sentence = doc.sentence_text(candidate.span.root_tok);
            let aspect = self
                .pipeline
                .normalizer()
                .normalize_cased(doc.span_text(&candidate.span));
            let Classification { sentiment, score } =
                self.classifier.classify(sentence, &aspect)?;
            let span = self
                .pipeline
                .aspect_span(&doc, &candidate.span, &candidate.norm);
            results.push(AspectSentiment::new(aspect, sentiment, score, Some(span)));
        }
        Ok(results)
    }
}

impl<P: Parser, C: AspectClassifier> Analyzer for TransformerAnalyzer<P, C> {
    fn analyze(&self, text: &str) -> Vec<AspectSentiment> {
        match self.try_analyze(text) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "classifier analysis failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{DepLabel, Document, PosTag, Span, Token};
    use crate::error::AbsaError;
    use crate::types::Sentiment;

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

    struct PizzaParser;

    impl Parser for PizzaParser {
        fn parse(&self, text: &str) -> Result<Document> {
            let tokens = vec![
                tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
                tok("pizza", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
                tok("was", PosTag::Verb, DepLabel::Root, 10, 2, 2),
                tok("delicious", PosTag::Adjective, DepLabel::Acomp, 14, 3, 2),
            ];
            let chunks = vec![Span::new(0, 2, 1, 0, 9)];
            Ok(Document::new(text, tokens, chunks))
        }
    }

    /// Records the pair it was asked about and answers positive.
    struct FixedClassifier;

    impl AspectClassifier for FixedClassifier {
        fn classify(&self, text: &str, aspect: &str) -> Result<Classification> {
            assert!(text.contains(aspect));
            Ok(Classification {
                sentiment: Sentiment::Positive,
                score: 0.93,
            })
        }
    }

    struct FailingClassifier;

    impl AspectClassifier for FailingClassifier {
        fn classify(&self, _text: &str, _aspect: &str) -> Result<Classification> {
            Err(AbsaError::Classify("model timeout".to_string()))
        }
    }

    #[test]
    fn test_classifier_verdict_becomes_record() {
        let analyzer =
            TransformerAnalyzer::new(PizzaParser, FixedClassifier, Arc::new(RuleSet::default()))
                .unwrap();
        let results = analyzer.try_analyze("The pizza was delicious").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].aspect, "pizza");
        assert_eq!(results[0].sentiment, Sentiment::Positive);
        assert_eq!(results[0].confidence, 0.93);
    }

    #[test]
    fn test_classifier_error_surfaces_then_swallowed() {
        let analyzer =
            TransformerAnalyzer::new(PizzaParser, FailingClassifier, Arc::new(RuleSet::default()))
                .unwrap();
        assert!(analyzer.try_analyze("The pizza was delicious").is_err());
        assert!(analyzer.analyze("The pizza was delicious").is_empty());
    }
}
