//! Crate error type.

use thiserror::Error;

/// Failures surfaced by analyzers and their collaborators.
///
/// The extraction pipeline itself is total — it degrades to reject/no-merge
/// rather than failing — so every variant here originates at a collaborator
/// boundary or at configuration load.
#[derive(Debug, Error)]
pub enum AbsaError {
    /// The dependency parser failed or returned a malformed document.
    #[error("parse failed: {0}")]
    Parse(String),

    /// The lexicon scorer failed for a context string.
    #[error("scorer failed: {0}")]
    Scorer(String),

    /// The transformer classifier failed for a (text, aspect) pair.
    #[error("classification failed: {0}")]
    Classify(String),

    /// The generative backend failed to produce a completion.
    #[error("backend failed: {0}")]
    Backend(String),

    /// A backend response could not be decoded into the expected shape.
    #[error("malformed backend response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Rule-set configuration could not be loaded or compiled.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AbsaError>;
