//! Command handlers. Each module owns its clap args struct and returns
//! `anyhow::Result` to the binary's error boundary.

pub mod crawl;
pub mod infer;
pub mod serve;

use std::time::Duration;

use lex_config::WikiConfig;
use lex_wiki::{RetryPolicy, WikiOptions};

/// Map the wiki config section onto client options.
pub fn wiki_options(wiki: &WikiConfig) -> WikiOptions {
    WikiOptions {
        wiktionary_api: wiki.wiktionary_api.clone(),
        wikidata_api: wiki.wikidata_api.clone(),
        user_agent: wiki.user_agent.clone(),
        maxlag: wiki.maxlag,
        timeout: (wiki.timeout_secs > 0).then(|| Duration::from_secs(wiki.timeout_secs)),
        retry: RetryPolicy::unbounded(Duration::from_secs(wiki.backoff_secs)),
        listing_retry: RetryPolicy::unbounded(Duration::from_secs(wiki.listing_backoff_secs)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zero_timeout_means_no_timeout() {
        let options = wiki_options(&WikiConfig::default());
        assert_eq!(options.timeout, None);
        assert_eq!(options.retry.delay, Duration::from_secs(10));
        assert_eq!(options.listing_retry.delay, Duration::from_secs(15));
    }

    #[test]
    fn configured_timeout_is_carried_over() {
        let wiki = WikiConfig {
            timeout_secs: 30,
            ..WikiConfig::default()
        };
        assert_eq!(
            wiki_options(&wiki).timeout,
            Some(Duration::from_secs(30))
        );
    }
}
