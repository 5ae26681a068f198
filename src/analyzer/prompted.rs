//! Generative-model analyzer.
//!
//! Builds a structured-output prompt, sends it to a caller-supplied backend,
//! and parses the JSON reply. The model does both extraction and polarity;
//! none of the rule pipeline runs here, so records carry no spans.

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::analyzer::{clean_text, Analyzer};
use crate::error::Result;
use crate::extract::dedup_by_key;
use crate::types::{AspectSentiment, Sentiment};

/// Text completion against a generative model, supplied by the caller.
pub trait GenerativeBackend {
    fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct PromptedAnalyzer<B> {
    backend: B,
}

impl<B: GenerativeBackend> PromptedAnalyzer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn try_analyze(&self, text: &str) -> Result<Vec<AspectSentiment>> {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let reply = self.backend.complete(&build_prompt(&cleaned))?;
        let parsed: PromptedResponse = serde_json::from_str(extract_json(&reply))?;

        let records = parsed
            .aspects
            .into_iter()
            .filter(|a| !a.aspect.trim().is_empty())
            .map(|a| {
                AspectSentiment::new(a.aspect.trim(), a.sentiment, a.confidence, None)
            })
            .collect();
        Ok(dedup_by_key(records, |r: &AspectSentiment| {
            r.aspect.to_lowercase()
        }))
    }
}

impl<B: GenerativeBackend> Analyzer for PromptedAnalyzer<B> {
    fn analyze(&self, text: &str) -> Vec<AspectSentiment> {
        match self.try_analyze(text) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "prompted analysis failed");
                Vec::new()
            }
        }
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Extract every aspect mentioned in the review below and its sentiment.\n\
         Respond with JSON only, in this exact shape:\n\
         {{\"aspects\": [{{\"aspect\": \"...\", \"sentiment\": \"positive|negative|neutral\", \
         \"confidence\": 0.0}}]}}\n\
         Aspects are short noun phrases; confidence is between 0 and 1.\n\n\
         Review: {text}"
    )
}

/// Models often wrap the JSON in prose or code fences. Take the outermost
/// brace-delimited block; if there is none, hand the reply through so the
/// parse error names the actual content.
fn extract_json(reply: &str) -> &str {
    match (reply.find('{'), reply.rfind('}')) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => reply,
    }
}

#[derive(Debug, Deserialize)]
struct PromptedResponse {
    #[serde(default)]
    aspects: Vec<PromptedAspect>,
}

#[derive(Debug, Deserialize)]
struct PromptedAspect {
    aspect: String,
    #[serde(deserialize_with = "sentiment_label")]
    sentiment: Sentiment,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

/// Case-insensitive sentiment label ("Positive", "NEGATIVE", ...).
fn sentiment_label<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Sentiment, D::Error> {
    let label = String::deserialize(deserializer)?;
    match label.to_lowercase().as_str() {
        "positive" => Ok(Sentiment::Positive),
        "negative" => Ok(Sentiment::Negative),
        "neutral" => Ok(Sentiment::Neutral),
        other => Err(serde::de::Error::custom(format!(
            "unknown sentiment label: {other}"
        ))),
    }
}
