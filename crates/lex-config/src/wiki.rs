//! Wiki API connection configuration.

use serde::{Deserialize, Serialize};

fn default_wiktionary_api() -> String {
    "https://en.wiktionary.org/w/api.php".to_string()
}

fn default_wikidata_api() -> String {
    "https://www.wikidata.org/w/api.php".to_string()
}

fn default_user_agent() -> String {
    "lexlift/0.1 (verb lexeme import tooling)".to_string()
}

const fn default_maxlag() -> u32 {
    5
}

const fn default_backoff_secs() -> u64 {
    10
}

const fn default_listing_backoff_secs() -> u64 {
    15
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikiConfig {
    /// Wiktionary `api.php` endpoint.
    #[serde(default = "default_wiktionary_api")]
    pub wiktionary_api: String,

    /// Wikidata `api.php` endpoint.
    #[serde(default = "default_wikidata_api")]
    pub wikidata_api: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `maxlag` value sent to both APIs.
    #[serde(default = "default_maxlag")]
    pub maxlag: u32,

    /// Per-request timeout in seconds; 0 disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,

    /// Fixed pause between retries of entry fetches and existence checks.
    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: u64,

    /// Fixed pause between retries of the category listing.
    #[serde(default = "default_listing_backoff_secs")]
    pub listing_backoff_secs: u64,

    /// Language code for lexeme existence checks.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            wiktionary_api: default_wiktionary_api(),
            wikidata_api: default_wikidata_api(),
            user_agent: default_user_agent(),
            maxlag: default_maxlag(),
            timeout_secs: 0,
            backoff_secs: default_backoff_secs(),
            listing_backoff_secs: default_listing_backoff_secs(),
            language: default_language(),
        }
    }
}
