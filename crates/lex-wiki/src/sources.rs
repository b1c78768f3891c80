//! Adapters from [`WikiClient`] to the lex-core collaborator traits.
//!
//! The orchestrators are generic over the traits; these impls are what the
//! binary plugs in. `WikiError` collapses to [`SourceError`] here, so callers
//! only distinguish overloaded / malformed / other.

use lex_core::errors::SourceError;
use lex_core::source::{CandidatePage, CandidateSource, DictionarySource, ExistenceIndex};

use crate::WikiClient;

/// One Wiktionary category served as the paginated candidate listing.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    client: WikiClient,
    category: String,
    page_size: u32,
}

impl CategoryListing {
    #[must_use]
    pub fn new(client: WikiClient, category: impl Into<String>, page_size: u32) -> Self {
        Self {
            client,
            category: category.into(),
            page_size,
        }
    }
}

impl CandidateSource for CategoryListing {
    async fn next_page(&self, continuation: Option<&str>) -> Result<CandidatePage, SourceError> {
        self.client
            .category_page(&self.category, self.page_size, continuation)
            .await
            .map_err(Into::into)
    }
}

impl ExistenceIndex for WikiClient {
    async fn exists(&self, term: &str, language: &str) -> Result<bool, SourceError> {
        self.lexeme_exists(term, language).await.map_err(Into::into)
    }
}

impl DictionarySource for WikiClient {
    async fn fetch_entry(&self, title: &str) -> Result<String, SourceError> {
        self.entry_wikitext(title).await.map_err(Into::into)
    }
}
