//! Candidate lemma validation.
//!
//! The first gate of both pipelines. It runs before any network or inference
//! work, so page titles that cannot be verb lemmas never cost an external
//! call.

use std::collections::HashSet;

use crate::rejection::RejectionReason;

/// Minimum lemma length applied by the word-list loaders.
///
/// The validator itself accepts shorter strings (including the empty
/// string); loaders filter on this before anything reaches it.
pub const MIN_LEMMA_LEN: usize = 2;

/// Check a candidate lemma, reporting why it is unusable.
///
/// A lemma is well formed when it consists of ASCII letters only. Spelling
/// is checked before irregular membership, so a malformed entry in
/// `irregulars` still comes back as [`RejectionReason::InvalidSpelling`].
///
/// # Errors
///
/// [`RejectionReason::InvalidSpelling`] for anything outside ASCII letters,
/// [`RejectionReason::KnownIrregular`] for members of `irregulars`.
pub fn validate(candidate: &str, irregulars: &HashSet<String>) -> Result<(), RejectionReason> {
    if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RejectionReason::InvalidSpelling);
    }
    if irregulars.contains(candidate) {
        return Err(RejectionReason::KnownIrregular);
    }
    Ok(())
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_valid(candidate: &str, irregulars: &HashSet<String>) -> bool {
    validate(candidate, irregulars).is_ok()
}
