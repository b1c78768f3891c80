//! Inference error types.

use lex_core::rejection::RejectionReason;
use thiserror::Error;

/// Failures of the form inference engine.
///
/// All variants are recoverable: the lemma is rejected and the pipeline
/// moves on. None of them aborts a crawl.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InferenceError {
    /// Inference needs exactly one conjugation template on the entry.
    #[error("expected exactly one conjugation template, found {count}")]
    AmbiguousTemplate { count: usize },

    /// Obsolete markup convention repeating the lemma before the forms;
    /// not reliably parseable.
    #[error("legacy template syntax with {arg_count} positional arguments")]
    LegacySyntax { arg_count: usize },

    /// The stem+ending dispatch saw an ending outside the recognized set.
    #[error("unknown stem marker `{marker}`")]
    UnknownStemMarker { marker: String },
}

impl InferenceError {
    /// The rejection reason this failure surfaces as.
    #[must_use]
    pub const fn reason(&self) -> RejectionReason {
        match self {
            Self::AmbiguousTemplate { .. } => RejectionReason::AmbiguousTemplate,
            Self::LegacySyntax { .. } => RejectionReason::LegacySyntax,
            Self::UnknownStemMarker { .. } => RejectionReason::UnknownStemMarker,
        }
    }
}
