//! Wikidata lexeme existence checks via `wbsearchentities`.

use serde::Deserialize;

use crate::WikiClient;
use crate::error::WikiError;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    search: Option<Vec<SearchHit>>,
    error: Option<SearchErrorBody>,
}

// Hits are opaque here; only their presence matters.
#[derive(Debug, Deserialize)]
struct SearchHit {}

#[derive(Debug, Deserialize)]
struct SearchErrorBody {
    code: String,
}

impl WikiClient {
    /// Whether a lexeme for `term` in `language` already exists.
    ///
    /// A response without a `search` array is treated as lag and retried:
    /// the API omits it while shedding load, and only a decoded `search`
    /// answers the question either way.
    ///
    /// # Errors
    ///
    /// [`WikiError::Malformed`] for undecodable responses,
    /// [`WikiError::RetriesExhausted`] when a bounded policy gives up.
    pub async fn lexeme_exists(&self, term: &str, language: &str) -> Result<bool, WikiError> {
        let url = format!(
            "{}?action=wbsearchentities&type=lexeme&limit=1&format=json&maxlag={}&language={}&search={}",
            self.wikidata_api,
            self.maxlag,
            urlencoding::encode(language),
            urlencoding::encode(term)
        );

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.lexeme_exists_once(&url).await {
                Ok(exists) => return Ok(exists),
                Err(error) if error.is_transient() => {
                    self.retry
                        .backoff("wbsearchentities", attempt, error)
                        .await?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn lexeme_exists_once(&self, url: &str) -> Result<bool, WikiError> {
        let text = self.http.get(url).send().await?.text().await?;
        decode_search(&text)
    }
}

fn decode_search(text: &str) -> Result<bool, WikiError> {
    let data: SearchResponse = serde_json::from_str(text).map_err(|error| WikiError::Malformed {
        api: "wbsearchentities",
        detail: error.to_string(),
    })?;
    match data.search {
        Some(hits) => Ok(!hits.is_empty()),
        None => Err(WikiError::Overloaded {
            api: "wbsearchentities",
            detail: data
                .error
                .map_or_else(|| "no search array in response".to_string(), |e| e.code),
        }),
    }
}
