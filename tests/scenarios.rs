//! End-to-end scenarios through the lexicon analyzer.
//!
//! The fixture parser returns hand-built parses for a fixed set of review
//! sentences, standing in for a real tagger so the pipeline itself is what
//! gets exercised.

use std::sync::Arc;

use aspect_miner::{
    analyze_batch, AbsaError, DefaultLexicon, DepLabel, Document, LexiconAnalyzer, Parser, PosTag,
    Result, RuleSet, Sentiment, Span, Token,
};

const PIZZA_SERVICE: &str = "The pizza was delicious but the service was terrible.";
const NEGATED_SOUP: &str = "The soup was not good.";
const COORDINATED: &str = "The pizza and the pasta salad were amazing.";
const FLAVOR_COMPOUND: &str = "The chocolate and vanilla milkshake was fantastic.";
const ICE_CREAM_COMPOUND: &str = "The chocolate and vanilla ice cream was delicious.";

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

/// Canned parses for the scenario sentences; anything else is a parse error.
struct FixtureParser;

impl Parser for FixtureParser {
    fn parse(&self, text: &str) -> Result<Document> {
        match text {
            PIZZA_SERVICE => Ok(pizza_service_doc()),
            NEGATED_SOUP => Ok(negated_soup_doc()),
            COORDINATED => Ok(coordinated_doc()),
            FLAVOR_COMPOUND => Ok(flavor_compound_doc()),
            ICE_CREAM_COMPOUND => Ok(ice_cream_compound_doc()),
            other => Err(AbsaError::Parse(format!("no fixture for: {other}"))),
        }
    }
}

fn pizza_service_doc() -> Document {
    let tokens = vec![
        tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
        tok("pizza", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
        tok("was", PosTag::Verb, DepLabel::Root, 10, 2, 2),
        tok("delicious", PosTag::Adjective, DepLabel::Acomp, 14, 3, 2),
        tok("but", PosTag::Conjunction, DepLabel::Cc, 24, 4, 2),
        tok("the", PosTag::Determiner, DepLabel::Det, 28, 5, 6),
        tok("service", PosTag::Noun, DepLabel::Nsubj, 32, 6, 7),
        tok("was", PosTag::Verb, DepLabel::Conj, 40, 7, 2),
        tok("terrible", PosTag::Adjective, DepLabel::Acomp, 44, 8, 7),
        tok(".", PosTag::Punctuation, DepLabel::Other, 52, 9, 2),
    ];
    let chunks = vec![Span::new(0, 2, 1, 0, 9), Span::new(5, 7, 6, 28, 39)];
    Document::new(PIZZA_SERVICE, tokens, chunks)
}

fn negated_soup_doc() -> Document {
    let tokens = vec![
        tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
        tok("soup", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
        tok("was", PosTag::Verb, DepLabel::Root, 9, 2, 2),
        tok("not", PosTag::Adverb, DepLabel::Neg, 13, 3, 2),
        tok("good", PosTag::Adjective, DepLabel::Acomp, 17, 4, 2),
        tok(".", PosTag::Punctuation, DepLabel::Other, 21, 5, 2),
    ];
    let chunks = vec![Span::new(0, 2, 1, 0, 8)];
    Document::new(NEGATED_SOUP, tokens, chunks)
}

fn coordinated_doc() -> Document {
    let tokens = vec![
        tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
        tok("pizza", PosTag::Noun, DepLabel::Nsubj, 4, 1, 6),
        tok("and", PosTag::Conjunction, DepLabel::Cc, 10, 2, 1),
        tok("the", PosTag::Determiner, DepLabel::Det, 14, 3, 5),
        tok("pasta", PosTag::Noun, DepLabel::Other, 18, 4, 5),
        tok("salad", PosTag::Noun, DepLabel::Conj, 24, 5, 1),
        tok("were", PosTag::Verb, DepLabel::Root, 30, 6, 6),
        tok("amazing", PosTag::Adjective, DepLabel::Acomp, 35, 7, 6),
        tok(".", PosTag::Punctuation, DepLabel::Other, 42, 8, 6),
    ];
    let chunks = vec![Span::new(0, 2, 1, 0, 9), Span::new(3, 6, 5, 14, 29)];
    Document::new(COORDINATED, tokens, chunks)
}

fn flavor_compound_doc() -> Document {
    let tokens = vec![
        tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 4),
        tok("chocolate", PosTag::Noun, DepLabel::Other, 4, 1, 4),
        tok("and", PosTag::Conjunction, DepLabel::Cc, 14, 2, 1),
        tok("vanilla", PosTag::Noun, DepLabel::Conj, 18, 3, 1),
        tok("milkshake", PosTag::Noun, DepLabel::Nsubj, 26, 4, 5),
        tok("was", PosTag::Verb, DepLabel::Root, 36, 5, 5),
        tok("fantastic", PosTag::Adjective, DepLabel::Acomp, 40, 6, 5),
        tok(".", PosTag::Punctuation, DepLabel::Other, 49, 7, 5),
    ];
    let chunks = vec![Span::new(0, 5, 4, 0, 35)];
    Document::new(FLAVOR_COMPOUND, tokens, chunks)
}

fn ice_cream_compound_doc() -> Document {
    let tokens = vec![
        tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 5),
        tok("chocolate", PosTag::Noun, DepLabel::Other, 4, 1, 5),
        tok("and", PosTag::Conjunction, DepLabel::Cc, 14, 2, 1),
        tok("vanilla", PosTag::Noun, DepLabel::Conj, 18, 3, 1),
        tok("ice", PosTag::Noun, DepLabel::Other, 26, 4, 5),
        tok("cream", PosTag::Noun, DepLabel::Nsubj, 30, 5, 6),
        tok("was", PosTag::Verb, DepLabel::Root, 36, 6, 6),
        tok("delicious", PosTag::Adjective, DepLabel::Acomp, 40, 7, 6),
        tok(".", PosTag::Punctuation, DepLabel::Other, 49, 8, 6),
    ];
    let chunks = vec![Span::new(0, 6, 5, 0, 35)];
    Document::new(ICE_CREAM_COMPOUND, tokens, chunks)
}

fn analyzer() -> LexiconAnalyzer<FixtureParser, DefaultLexicon> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    LexiconAnalyzer::new(
        FixtureParser,
        DefaultLexicon::new(),
        Arc::new(RuleSet::default()),
    )
    .unwrap()
}

#[test]
fn contrastive_review_splits_polarity() {
    let results = analyzer().try_analyze(PIZZA_SERVICE).unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0].aspect, "pizza");
    assert_eq!(results[0].sentiment, Sentiment::Positive);
    assert_eq!(results[0].span, Some((4, 9)));

    assert_eq!(results[1].aspect, "service");
    assert_eq!(results[1].sentiment, Sentiment::Negative);
    assert_eq!(results[1].span, Some((32, 39)));
}

#[test]
fn negation_flips_aspect_polarity() {
    let results = analyzer().try_analyze(NEGATED_SOUP).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].aspect, "soup");
    // "good" alone is positive; the negation scope flips it.
    assert_eq!(results[0].sentiment, Sentiment::Negative);
    assert!(results[0].confidence > 0.05);
}

#[test]
fn coordinated_aspects_merge_into_one() {
    let results = analyzer().try_analyze(COORDINATED).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].aspect.contains("pizza"));
    assert!(results[0].aspect.contains("pasta salad"));
    assert_eq!(results[0].sentiment, Sentiment::Positive);
}

#[test]
fn flavor_compound_stays_one_aspect() {
    // The flavors alone would be rejected as bare ingredients; the compound
    // noun phrase survives as a single aspect.
    let results = analyzer().try_analyze(FLAVOR_COMPOUND).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].aspect, "chocolate and vanilla milkshake");
    assert_eq!(results[0].sentiment, Sentiment::Positive);
}

#[test]
fn ice_cream_compound_keeps_protected_phrase() {
    // "ice cream" is both a protected phrase and a strippable category
    // prefix; inside the compound it must survive intact.
    let results = analyzer().try_analyze(ICE_CREAM_COMPOUND).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].aspect, "chocolate and vanilla ice cream");
    assert_eq!(results[0].sentiment, Sentiment::Positive);
    assert_eq!(results[0].span, Some((4, 35)));
}

#[test]
fn empty_and_blank_input_yield_empty() {
    // The fixture parser errors on unknown text, so these passing proves
    // blank input never reaches the parser.
    let a = analyzer();
    assert!(a.try_analyze("").unwrap().is_empty());
    assert!(a.try_analyze("   \n\t ").unwrap().is_empty());
}

#[test]
fn parse_failure_is_an_error_not_a_panic() {
    let a = analyzer();
    assert!(matches!(
        a.try_analyze("unfixtured text"),
        Err(AbsaError::Parse(_))
    ));
    // The infallible entry point swallows it.
    use aspect_miner::Analyzer;
    assert!(a.analyze("unfixtured text").is_empty());
}

#[test]
fn analysis_is_deterministic() {
    let a = analyzer();
    let first = a.try_analyze(PIZZA_SERVICE).unwrap();
    let second = a.try_analyze(PIZZA_SERVICE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn confidence_always_in_unit_interval() {
    let a = analyzer();
    for text in [
        PIZZA_SERVICE,
        NEGATED_SOUP,
        COORDINATED,
        FLAVOR_COMPOUND,
        ICE_CREAM_COMPOUND,
    ] {
        for record in a.try_analyze(text).unwrap() {
            assert!((0.0..=1.0).contains(&record.confidence), "{record}");
        }
    }
}

#[test]
fn no_duplicate_aspects_per_document() {
    let a = analyzer();
    for text in [
        PIZZA_SERVICE,
        NEGATED_SOUP,
        COORDINATED,
        FLAVOR_COMPOUND,
        ICE_CREAM_COMPOUND,
    ] {
        let results = a.try_analyze(text).unwrap();
        let mut lowered: Vec<String> =
            results.iter().map(|r| r.aspect.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), results.len());
    }
}

#[test]
fn batch_preserves_input_order() {
    let texts = [COORDINATED, NEGATED_SOUP, PIZZA_SERVICE];
    let batches = analyze_batch(&analyzer(), &texts);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 1);
    assert_eq!(batches[1][0].aspect, "soup");
    assert_eq!(batches[2].len(), 2);
}
