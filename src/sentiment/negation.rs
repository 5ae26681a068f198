//! Negation scoping.
//!
//! Three tiers, any hit negates: a negation attached directly to the aspect
//! root, one attached to any governing clause, or a negation word in the
//! surface window just before the root (for when the parse is ambiguous).

use std::sync::Arc;

use crate::config::RuleSet;
use crate::doc::{DepLabel, Document};

/// Decides whether an aspect root falls inside a negation scope.
#[derive(Debug, Clone)]
pub struct NegationDetector {
    rules: Arc<RuleSet>,
}

impl NegationDetector {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn is_negated(&self, doc: &Document, root_idx: usize) -> bool {
        if self.has_negation_child(doc, root_idx) {
            return true;
        }
        if doc
            .ancestors(root_idx)
            .any(|anc| self.has_negation_child(doc, anc))
        {
            return true;
        }
        let window = self.rules.thresholds.negation_window;
        doc.tokens()[root_idx.saturating_sub(window)..root_idx]
            .iter()
            .any(|t| self.rules.is_negation_word(&t.lower()))
    }

    fn has_negation_child(&self, doc: &Document, idx: usize) -> bool {
        doc.children(idx).iter().any(|&c| {
            let child = &doc.tokens()[c];
            child.dep == DepLabel::Neg || self.rules.is_negation_word(&child.lower())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{PosTag, Token};

    fn detector() -> NegationDetector {
        NegationDetector::new(Arc::new(RuleSet::default()))
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

    /// "The soup was not good" — `not` hangs off the verb governing `soup`.
    fn negated_clause() -> Document {
        let tokens = vec![
            tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
            tok("soup", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
            tok("was", PosTag::Verb, DepLabel::Root, 9, 2, 2),
            tok("not", PosTag::Adverb, DepLabel::Neg, 13, 3, 2),
            tok("good", PosTag::Adjective, DepLabel::Acomp, 17, 4, 2),
        ];
        Document::new("The soup was not good", tokens, vec![])
    }

    #[test]
    fn test_negation_on_governing_clause() {
        let doc = negated_clause();
        assert!(detector().is_negated(&doc, 1));
    }

    #[test]
    fn test_direct_negation_child() {
        // "no pizza" with `no` attached to the noun.
        let tokens = vec![
            tok("no", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
            tok("pizza", PosTag::Noun, DepLabel::Root, 3, 1, 1),
        ];
        let doc = Document::new("no pizza", tokens, vec![]);
        assert!(detector().is_negated(&doc, 1));
    }

    #[test]
    fn test_surface_window_catches_unattached_negation() {
        // `never` structurally unrelated to the root, but 2 tokens before.
        let tokens = vec![
            tok("never", PosTag::Adverb, DepLabel::Other, 0, 0, 0),
            tok("again", PosTag::Adverb, DepLabel::Other, 6, 1, 0),
            tok("pizza", PosTag::Noun, DepLabel::Root, 12, 2, 2),
        ];
        let doc = Document::new("never again pizza", tokens, vec![]);
        assert!(detector().is_negated(&doc, 2));
    }

    #[test]
    fn test_negation_outside_window_ignored() {
        // `not` is 5 tokens before the root, beyond the default window of 4.
        // Every token heads itself so no parent-child tier can fire and only
        // the surface window is in play.
        let words = ["not", "w1", "w2", "w3", "w4", "pizza"];
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| tok(w, PosTag::Other, DepLabel::Other, i * 6, i, i))
            .collect();
        let doc = Document::new("not w1 w2 w3 w4 pizza", tokens, vec![]);
        assert!(!detector().is_negated(&doc, 5));
    }

    #[test]
    fn test_negation_inside_window_detected_without_attachment() {
        // Same flat structure, but `not` sits within the 4-token window.
        let words = ["w0", "not", "w2", "w3", "w4", "pizza"];
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| tok(w, PosTag::Other, DepLabel::Other, i * 6, i, i))
            .collect();
        let doc = Document::new("w0 not w2 w3 w4 pizza", tokens, vec![]);
        assert!(detector().is_negated(&doc, 5));
    }

    #[test]
    fn test_plain_clause_not_negated() {
        let tokens = vec![
            tok("The", PosTag::Determiner, DepLabel::Det, 0, 0, 1),
            tok("soup", PosTag::Noun, DepLabel::Nsubj, 4, 1, 2),
            tok("was", PosTag::Verb, DepLabel::Root, 9, 2, 2),
            tok("good", PosTag::Adjective, DepLabel::Acomp, 13, 3, 2),
        ];
        let doc = Document::new("The soup was good", tokens, vec![]);
        assert!(!detector().is_negated(&doc, 1));
    }
}
