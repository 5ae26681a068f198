//! Analyzer backends.
//!
//! Every backend implements [`Analyzer`]: text in, ordered aspect–sentiment
//! records out. The lexicon and transformer backends share the extraction
//! pipeline and differ only in how an aspect gets its polarity; the prompted
//! backend delegates both steps to a generative model.
//!
//! [`Analyzer::analyze`] never fails: backends log the error and return an
//! empty result, so one bad document cannot abort a batch. Callers that need
//! the error use the backend's `try_analyze`.

pub mod lexicon;
pub mod prompted;
pub mod transformer;

pub use lexicon::LexiconAnalyzer;
pub use prompted::{GenerativeBackend, PromptedAnalyzer};
pub use transformer::{AspectClassifier, TransformerAnalyzer};

use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;

use crate::doc::Document;
use crate::error::Result;
use crate::types::AspectSentiment;

/// Dependency parsing, supplied by the caller.
pub trait Parser {
    fn parse(&self, text: &str) -> Result<Document>;
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse(&self, text: &str) -> Result<Document> {
        (**self).parse(text)
    }
}

/// Aspect-based sentiment analysis over one text.
pub trait Analyzer {
    /// Ordered aspect records for `text`. Infallible: backends report
    /// failures through logging and return an empty list.
    fn analyze(&self, text: &str) -> Vec<AspectSentiment>;
}

static PAREN_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn paren_re() -> Option<&'static Regex> {
    PAREN_RE
        .get_or_init(|| Regex::new(r"\([^)]*\)").ok())
        .as_ref()
}

/// Pre-parse cleanup applied by every backend: parenthesized asides are
/// dropped, whitespace collapsed, ends trimmed.
pub fn clean_text(text: &str) -> String {
    let stripped = match paren_re() {
        Some(re) => re.replace_all(text, " "),
        None => text.into(),
    };
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Analyze many texts in parallel, preserving input order.
pub fn analyze_batch<A, T>(analyzer: &A, texts: &[T]) -> Vec<Vec<AspectSentiment>>
where
    A: Analyzer + Sync,
    T: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|t| analyzer.analyze(t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_clean_text_strips_parentheticals() {
        assert_eq!(
            clean_text("The pizza (from the old menu) was great"),
            "The pizza was great"
        );
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  the   soup\twas\n good  "), "the soup was good");
    }

    #[test]
    fn test_clean_text_empty_and_blank() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
        assert_eq!(clean_text("(aside)"), "");
    }

    struct Echo;

    impl Analyzer for Echo {
        fn analyze(&self, text: &str) -> Vec<AspectSentiment> {
            vec![AspectSentiment::new(text, Sentiment::Neutral, 0.0, None)]
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let out = analyze_batch(&Echo, &["a", "b", "c"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0][0].aspect, "a");
        assert_eq!(out[2][0].aspect, "c");
    }
}
