//! Interfaces to the external collaborators.
//!
//! Both pipelines are generic over these traits: tests inject in-memory
//! fixtures, the binary injects the wiki clients and the on-disk word lists.

use crate::errors::{SourceError, StoreError};
use crate::rejection::RejectionRecord;

/// One page of candidate titles from the upstream listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePage {
    pub titles: Vec<String>,
    /// Opaque continuation token; `None` means the listing is exhausted.
    pub continuation: Option<String>,
}

/// Paginated listing of candidate lemmas.
pub trait CandidateSource {
    /// Fetch the page after `continuation`, or the first page for `None`.
    async fn next_page(&self, continuation: Option<&str>) -> Result<CandidatePage, SourceError>;
}

/// Lookup against the lexical database being filled.
pub trait ExistenceIndex {
    /// Whether a lexeme for `term` in `language` already exists.
    async fn exists(&self, term: &str, language: &str) -> Result<bool, SourceError>;
}

/// Source of raw dictionary entry markup.
pub trait DictionarySource {
    /// The wikitext of the entry titled `title`.
    async fn fetch_entry(&self, title: &str) -> Result<String, SourceError>;
}

/// The accumulated rejection list: consulted to skip lemmas rejected on
/// earlier passes, appended to as new rejections occur.
pub trait ExclusionLog {
    /// Whether `lemma` was rejected before.
    fn contains(&self, lemma: &str) -> bool;

    /// Persist a fresh rejection.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the backing store cannot be extended.
    fn record(&mut self, rejection: &RejectionRecord) -> Result<(), StoreError>;
}
