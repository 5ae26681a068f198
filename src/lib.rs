//! Aspect-based sentiment analysis for review text.
//!
//! Given a dependency-parsed document, the pipeline extracts the aspects a
//! review talks about (noun phrases, filtered through a rule set and
//! normalized to canonical forms) and attaches a sentiment label with a
//! confidence to each. Three interchangeable backends implement the same
//! [`Analyzer`] contract:
//!
//! - [`LexiconAnalyzer`]: rule pipeline plus a valence lexicon, no model
//!   dependencies. The reference backend.
//! - [`TransformerAnalyzer`]: same extraction, polarity from a caller-supplied
//!   sentence-pair classifier.
//! - [`PromptedAnalyzer`]: extraction and polarity both delegated to a
//!   generative model behind a [`GenerativeBackend`].
//!
//! Parsing is external: callers implement [`Parser`] over whatever tagger
//! they run and hand the crate a [`Document`] of tokens, dependency links,
//! and noun chunks.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use aspect_miner::{
//!     AbsaError, Analyzer, DefaultLexicon, Document, LexiconAnalyzer, Parser, Result, RuleSet,
//! };
//!
//! struct MyParser; // wraps whatever tagger you run
//!
//! impl Parser for MyParser {
//!     fn parse(&self, _text: &str) -> Result<Document> {
//!         Err(AbsaError::Parse("no tagger wired up".to_string()))
//!     }
//! }
//!
//! let rules = Arc::new(RuleSet::default());
//! let analyzer = LexiconAnalyzer::new(MyParser, DefaultLexicon::new(), rules)?;
//! for record in analyzer.analyze("The pizza was delicious but the service was terrible") {
//!     println!("{record}");
//! }
//! # Ok::<(), AbsaError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod doc;
pub mod error;
pub mod extract;
pub mod sentiment;
pub mod types;

pub use analyzer::{
    analyze_batch, clean_text, Analyzer, AspectClassifier, GenerativeBackend, LexiconAnalyzer,
    Parser, PromptedAnalyzer, TransformerAnalyzer,
};
pub use config::{RuleSet, Thresholds};
pub use doc::{DepLabel, Document, PosTag, Span, Token};
pub use error::{AbsaError, Result};
pub use extract::{AspectCandidate, ExtractionPipeline};
pub use sentiment::{DefaultLexicon, LexiconScorer, NegationDetector, SentimentScorer};
pub use types::{AspectSentiment, Classification, PolarityScores, Sentiment};
