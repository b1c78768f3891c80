//! Crawl pipeline configuration.

use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "English verbs".to_string()
}

const fn default_page_size() -> u32 {
    500
}

/// Irregular verbs whose entries are known to defeat inference; curated by
/// hand as the crawl trips over them.
fn default_irregulars() -> Vec<String> {
    [
        "ceebs", "cleave", "frain", "giue", "resing", "shend", "shew", "shrive", "talebear",
        "toshend", "toshake", "toshear",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlConfig {
    /// Wiktionary category to page through.
    #[serde(default = "default_category")]
    pub category: String,

    /// Titles requested per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Lemmas excluded before any network work.
    #[serde(default = "default_irregulars")]
    pub irregulars: Vec<String>,

    /// Stop after this many pages; unset runs to exhaustion.
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            page_size: default_page_size(),
            irregulars: default_irregulars(),
            max_pages: None,
        }
    }
}
