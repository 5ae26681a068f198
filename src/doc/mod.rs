//! Parsed-document model.
//!
//! The pipeline consumes a [`Document`] produced by an external dependency
//! parser: tokens with POS tags, dependency labels, head links, and character
//! offsets, plus the parser's noun-chunk spans. Everything here is immutable
//! after construction.
//!
//! A [`Span`] is the single shape every pipeline stage operates on. Lone
//! tokens are always wrapped via [`Span::from_token`], so no stage ever
//! branches on chunk-vs-token.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag (Universal POS subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Adverb,
    Verb,
    Determiner,
    Preposition,
    Pronoun,
    Conjunction,
    Punctuation,
    Other,
}

impl PosTag {
    /// NOUN or PROPN.
    pub fn is_noun(&self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// Syntactic dependency label linking a token to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepLabel {
    /// Adjectival modifier.
    Amod,
    /// Adverbial modifier.
    Advmod,
    /// Adjectival complement.
    Acomp,
    /// Open clausal complement.
    Xcomp,
    /// Attribute (predicate nominal).
    Attr,
    /// Direct object.
    Dobj,
    /// Object of preposition.
    Pobj,
    /// Nominal subject.
    Nsubj,
    /// Passive nominal subject.
    Nsubjpass,
    /// Negation modifier.
    Neg,
    /// Conjunct.
    Conj,
    /// Coordinating conjunction.
    Cc,
    /// Determiner.
    Det,
    /// Sentence root.
    Root,
    Other,
}

impl DepLabel {
    /// Labels that mark a sentiment-bearing modifier of a noun.
    pub fn is_opinion_modifier(&self) -> bool {
        matches!(self, Self::Amod | Self::Advmod | Self::Acomp)
    }

    /// Labels that mark the token as a subject/object/attribute of a clause.
    pub fn is_clause_argument(&self) -> bool {
        matches!(
            self,
            Self::Nsubj | Self::Nsubjpass | Self::Dobj | Self::Pobj | Self::Attr
        )
    }

    /// Labels collected from a governing verb's children.
    pub fn is_verb_complement(&self) -> bool {
        matches!(
            self,
            Self::Acomp | Self::Xcomp | Self::Advmod | Self::Attr | Self::Dobj
        )
    }
}

/// One parsed token. Offsets are byte offsets into the cleaned document text.
///
/// `head` is the index of the governing token; the sentence root points to
/// itself (spaCy convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    pub dep: DepLabel,
    pub start: usize,
    pub end: usize,
    pub sentence_idx: usize,
    pub token_idx: usize,
    pub head: usize,
}

impl Token {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: &str,
        lemma: &str,
        pos: PosTag,
        dep: DepLabel,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
        head: usize,
    ) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos,
            dep,
            start,
            end,
            sentence_idx,
            token_idx,
            head,
        }
    }

    /// Lowercased surface form.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// A contiguous token range with a designated root token.
///
/// `end_tok` is exclusive. A single token is a degenerate span of length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_tok: usize,
    pub end_tok: usize,
    pub root_tok: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl Span {
    pub fn new(
        start_tok: usize,
        end_tok: usize,
        root_tok: usize,
        start_char: usize,
        end_char: usize,
    ) -> Self {
        Self {
            start_tok,
            end_tok,
            root_tok,
            start_char,
            end_char,
        }
    }

    /// Wrap a lone token.
    pub fn from_token(token: &Token) -> Self {
        Self {
            start_tok: token.token_idx,
            end_tok: token.token_idx + 1,
            root_tok: token.token_idx,
            start_char: token.start,
            end_char: token.end,
        }
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end_tok - self.start_tok
    }

    pub fn is_empty(&self) -> bool {
        self.end_tok <= self.start_tok
    }

    /// Whether the token at `idx` falls inside this span.
    pub fn contains_token(&self, idx: usize) -> bool {
        idx >= self.start_tok && idx < self.end_tok
    }
}

/// A dependency-parsed document: cleaned text, tokens, and noun-chunk spans.
///
/// Children lists are precomputed at construction, ordered by token index.
/// Parser output is untrusted: head links that are out of range are ignored,
/// and chunks with out-of-range token indices are dropped.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    chunks: Vec<Span>,
    children: Vec<Vec<usize>>,
}

impl Document {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>, chunks: Vec<Span>) -> Self {
        let mut children = vec![Vec::new(); tokens.len()];
        for (i, tok) in tokens.iter().enumerate() {
            if tok.head != i && tok.head < tokens.len() {
                children[tok.head].push(i);
            }
        }
        let chunks = chunks
            .into_iter()
            .filter(|c| {
                c.start_tok < c.end_tok && c.end_tok <= tokens.len() && c.root_tok < tokens.len()
            })
            .collect();
        Self {
            text: text.into(),
            tokens,
            chunks,
            children,
        }
    }

    /// The cleaned input text the offsets index into.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Noun-chunk spans identified by the parser, in document order.
    pub fn noun_chunks(&self) -> &[Span] {
        &self.chunks
    }

    /// Children of the token at `idx`, ordered by token index.
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    /// Ancestors of the token at `idx`, nearest first, up to the sentence
    /// root. Bounded by document length so malformed head links cannot loop.
    pub fn ancestors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let mut current = idx;
        let mut remaining = self.tokens.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let head = self.tokens[current].head;
            if head == current || head >= self.tokens.len() {
                return None;
            }
            current = head;
            Some(current)
        })
    }

    /// Build a span over `[start_tok, end_tok)` with offsets taken from the
    /// boundary tokens. Returns `None` for an empty or out-of-range request.
    pub fn span(&self, start_tok: usize, end_tok: usize, root_tok: usize) -> Option<Span> {
        if start_tok >= end_tok || end_tok > self.tokens.len() {
            return None;
        }
        Some(Span::new(
            start_tok,
            end_tok,
            root_tok,
            self.tokens[start_tok].start,
            self.tokens[end_tok - 1].end,
        ))
    }

    /// Surface text of a span, sliced from the document text.
    pub fn span_text(&self, span: &Span) -> &str {
        let start = span.start_char.min(self.text.len());
        let end = span.end_char.clamp(start, self.text.len());
        self.text[start..end].trim()
    }

    /// Root token of a span.
    pub fn root<'a>(&'a self, span: &Span) -> &'a Token {
        &self.tokens[span.root_tok]
    }

    /// Trimmed text of the sentence containing the token at `idx`. Token
    /// offsets are clamped to the text like [`span_text`](Self::span_text).
    pub fn sentence_text(&self, idx: usize) -> &str {
        let sent = self.tokens[idx].sentence_idx;
        let mut start = self.tokens[idx].start;
        let mut end = self.tokens[idx].end;
        for tok in &self.tokens {
            if tok.sentence_idx == sent {
                start = start.min(tok.start);
                end = end.max(tok.end);
            }
        }
        let start = start.min(self.text.len());
        let end = end.clamp(start, self.text.len());
        self.text[start..end].trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    /// "The soup was good" with `was` as root.
    fn sample_doc() -> Document {
        let tokens = vec![
            tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
            tok("soup", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
            tok("was", PosTag::Verb, DepLabel::Root, 9, 2, 2),
            tok("good", PosTag::Adjective, DepLabel::Acomp, 13, 3, 2),
        ];
        let chunks = vec![Span::new(0, 2, 1, 0, 8)];
        Document::new("The soup was good", tokens, chunks)
    }

    #[test]
    fn test_children_ordered_by_index() {
        let doc = sample_doc();
        assert_eq!(doc.children(2), &[1, 3]);
        assert_eq!(doc.children(1), &[0]);
        assert!(doc.children(0).is_empty());
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let doc = sample_doc();
        let ancestors: Vec<_> = doc.ancestors(0).collect();
        assert_eq!(ancestors, vec![1, 2]);
        // The root has no ancestors.
        assert_eq!(doc.ancestors(2).count(), 0);
    }

    #[test]
    fn test_ancestors_bounded_on_malformed_heads() {
        // Two tokens pointing at each other must not loop forever.
        let tokens = vec![
            tok("a", PosTag::Other, DepLabel::Other, 0, 0, 1),
            tok("b", PosTag::Other, DepLabel::Other, 2, 1, 0),
        ];
        let doc = Document::new("a b", tokens, vec![]);
        assert!(doc.ancestors(0).count() <= 2);
    }

    #[test]
    fn test_span_text_and_root() {
        let doc = sample_doc();
        let chunk = doc.noun_chunks()[0];
        assert_eq!(doc.span_text(&chunk), "The soup");
        assert_eq!(doc.root(&chunk).text, "soup");
    }

    #[test]
    fn test_span_from_token_is_degenerate() {
        let doc = sample_doc();
        let span = Span::from_token(&doc.tokens()[1]);
        assert_eq!(span.len(), 1);
        assert!(span.contains_token(1));
        assert!(!span.contains_token(2));
        assert_eq!(doc.span_text(&span), "soup");
    }

    #[test]
    fn test_sentence_text() {
        let doc = sample_doc();
        assert_eq!(doc.sentence_text(1), "The soup was good");
    }

    #[test]
    fn test_out_of_range_chunks_dropped() {
        let tokens = vec![
            tok("a", PosTag::Noun, DepLabel::Root, 0, 0, 0),
            tok("b", PosTag::Noun, DepLabel::Other, 2, 1, 0),
        ];
        let chunks = vec![
            Span::new(0, 1, 0, 0, 1),
            // End and root beyond the token list.
            Span::new(0, 10, 10, 0, 3),
            Span::new(1, 2, 5, 2, 3),
        ];
        let doc = Document::new("a b", tokens, chunks);
        assert_eq!(doc.noun_chunks().len(), 1);
        assert_eq!(doc.root(&doc.noun_chunks()[0]).text, "a");
    }

    #[test]
    fn test_sentence_text_clamps_bad_offsets() {
        // Token claims a byte range far past the end of the text.
        let tokens = vec![tok("ghost", PosTag::Noun, DepLabel::Root, 500, 0, 0)];
        let doc = Document::new("short", tokens, vec![]);
        assert_eq!(doc.sentence_text(0), "");
    }

    #[test]
    fn test_document_span_rejects_bad_range() {
        let doc = sample_doc();
        assert!(doc.span(2, 2, 2).is_none());
        assert!(doc.span(0, 99, 0).is_none());
        assert!(doc.span(0, 2, 1).is_some());
    }
}
