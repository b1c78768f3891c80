//! The rejection taxonomy shared by both pipelines.
//!
//! Every stage that declines a lemma picks one of these reasons; the lemma
//! then lands on the exclusion log so later passes skip it without repeating
//! the work.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a pipeline stage declined to proceed with a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The title contains something other than ASCII letters.
    InvalidSpelling,
    /// Member of the configured irregular-verb set.
    KnownIrregular,
    /// The existence index already holds a lexeme for the term.
    AlreadyExists,
    /// The entry carries zero or multiple conjugation templates.
    AmbiguousTemplate,
    /// Obsolete markup convention that repeats the lemma before the forms.
    LegacySyntax,
    /// Shorthand ending outside the recognized marker set.
    UnknownStemMarker,
    /// The fallback conjugator produced nothing usable for the lemma.
    NoConjugation,
    /// A human reviewer rejected the proposed forms.
    ReviewerRejected,
}

impl RejectionReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidSpelling => "invalid_spelling",
            Self::KnownIrregular => "known_irregular",
            Self::AlreadyExists => "already_exists",
            Self::AmbiguousTemplate => "ambiguous_template",
            Self::LegacySyntax => "legacy_syntax",
            Self::UnknownStemMarker => "unknown_stem_marker",
            Self::NoConjugation => "no_conjugation",
            Self::ReviewerRejected => "reviewer_rejected",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declined lemma plus the stage's reason.
///
/// Surfaced alongside the record stream so no candidate disappears without
/// a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub lemma: String,
    pub reason: RejectionReason,
}

impl RejectionRecord {
    pub fn new(lemma: impl Into<String>, reason: RejectionReason) -> Self {
        Self {
            lemma: lemma.into(),
            reason,
        }
    }
}
