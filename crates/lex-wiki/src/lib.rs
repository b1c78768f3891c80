//! # lex-wiki
//!
//! Wiktionary and Wikidata HTTP clients for lexlift.
//!
//! One [`WikiClient`] covers three MediaWiki API calls:
//! - Wiktionary `list=categorymembers` — the paginated candidate listing
//! - Wiktionary `action=parse` — raw wikitext of one dictionary entry
//! - Wikidata `wbsearchentities` — does a lexeme already exist
//!
//! Calls carry a `maxlag` parameter and retry on transient failures per a
//! [`RetryPolicy`]; responses the client cannot decode are final errors.
//! [`sources`] adapts the client to the lex-core collaborator traits.

pub mod sources;
pub mod wikidata;
pub mod wiktionary;

mod error;
mod retry;

pub use error::WikiError;
pub use retry::RetryPolicy;
pub use sources::CategoryListing;

use std::time::Duration;

// ── Options ────────────────────────────────────────────────────────

/// Connection settings for [`WikiClient`].
#[derive(Debug, Clone)]
pub struct WikiOptions {
    /// Wiktionary `api.php` endpoint.
    pub wiktionary_api: String,
    /// Wikidata `api.php` endpoint.
    pub wikidata_api: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// `maxlag` value sent to both APIs.
    pub maxlag: u32,
    /// Per-request timeout; `None` lets a slow call run as long as it needs.
    pub timeout: Option<Duration>,
    /// Retry policy for entry fetches and existence checks.
    pub retry: RetryPolicy,
    /// Retry policy for the category listing.
    pub listing_retry: RetryPolicy,
}

impl Default for WikiOptions {
    fn default() -> Self {
        Self {
            wiktionary_api: "https://en.wiktionary.org/w/api.php".to_string(),
            wikidata_api: "https://www.wikidata.org/w/api.php".to_string(),
            user_agent: "lexlift/0.1 (verb lexeme import tooling)".to_string(),
            maxlag: 5,
            timeout: None,
            retry: RetryPolicy::default(),
            listing_retry: RetryPolicy::unbounded(Duration::from_secs(15)),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Wiktionary and Wikidata APIs.
#[derive(Debug, Clone)]
pub struct WikiClient {
    http: reqwest::Client,
    wiktionary_api: String,
    wikidata_api: String,
    maxlag: u32,
    retry: RetryPolicy,
    listing_retry: RetryPolicy,
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new(WikiOptions::default())
    }
}

impl WikiClient {
    /// Create a client from `options`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(options: WikiOptions) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            http: builder.build().expect("reqwest client should build"),
            wiktionary_api: options.wiktionary_api,
            wikidata_api: options.wikidata_api,
            maxlag: options.maxlag,
            retry: options.retry,
            listing_retry: options.listing_retry,
        }
    }
}
