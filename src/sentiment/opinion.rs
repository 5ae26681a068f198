//! Opinion-context attachment.
//!
//! Finds the sentiment-bearing words for an aspect by walking the dependency
//! parse: modifiers hanging off the aspect root, plus complements of the
//! governing verb when the aspect is a clause argument. When nothing is
//! found the enclosing sentence is the context.

use crate::doc::{Document, Span};
use crate::extract::dedup::dedup_by_key;

/// Collects the scoring context for an aspect span. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpinionAttacher;

impl OpinionAttacher {
    /// Context string used for polarity scoring.
    pub fn context(&self, doc: &Document, span: &Span) -> String {
        let root_idx = span.root_tok;
        let root = &doc.tokens()[root_idx];
        let mut opinion: Vec<usize> = Vec::new();

        for &child in doc.children(root_idx) {
            if doc.tokens()[child].dep.is_opinion_modifier() {
                opinion.push(child);
            }
        }

        // Subjects/objects/attributes inherit opinions from their governing
        // verb's complements ("the soup WAS GOOD").
        if root.dep.is_clause_argument() && root.head != root_idx {
            for &child in doc.children(root.head) {
                if doc.tokens()[child].dep.is_verb_complement() {
                    opinion.push(child);
                }
            }
        }

        if opinion.is_empty() {
            return doc.sentence_text(root_idx).to_string();
        }

        let mut opinion = dedup_by_key(opinion, |&i| i);
        opinion.sort_unstable();
        opinion
            .iter()
            .map(|&i| doc.tokens()[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
