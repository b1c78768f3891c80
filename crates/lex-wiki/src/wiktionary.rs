//! Wiktionary API calls: the paginated category listing and entry wikitext.

use lex_core::source::CandidatePage;
use serde::Deserialize;

use crate::WikiClient;
use crate::error::WikiError;

#[derive(Debug, Deserialize)]
struct CategoryResponse {
    error: Option<ApiErrorBody>,
    query: Option<CategoryQuery>,
    #[serde(rename = "continue")]
    continuation: Option<Continuation>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    info: Option<String>,
}

impl ApiErrorBody {
    fn describe(&self) -> String {
        match &self.info {
            Some(info) => format!("{}: {info}", self.code),
            None => self.code.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
struct CategoryMember {
    title: String,
}

#[derive(Debug, Deserialize)]
struct Continuation {
    cmcontinue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    error: Option<ApiErrorBody>,
    parse: Option<ParseBody>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    wikitext: WikitextBody,
}

#[derive(Debug, Deserialize)]
struct WikitextBody {
    #[serde(rename = "*")]
    content: String,
}

impl WikiClient {
    /// One page of the category listing, starting after `continuation`.
    ///
    /// Retries per the listing policy while the API reports lag or the
    /// transport fails.
    ///
    /// # Errors
    ///
    /// [`WikiError::Malformed`] for undecodable responses,
    /// [`WikiError::RetriesExhausted`] when a bounded policy gives up.
    pub async fn category_page(
        &self,
        category: &str,
        limit: u32,
        continuation: Option<&str>,
    ) -> Result<CandidatePage, WikiError> {
        let mut url = format!(
            "{}?action=query&list=categorymembers&cmtitle=Category%3A{}&cmlimit={limit}&format=json&maxlag={}",
            self.wiktionary_api,
            urlencoding::encode(category),
            self.maxlag
        );
        if let Some(token) = continuation {
            url.push_str("&cmcontinue=");
            url.push_str(&urlencoding::encode(token));
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.category_page_once(&url).await {
                Ok(page) => return Ok(page),
                Err(error) if error.is_transient() => {
                    self.listing_retry
                        .backoff("categorymembers", attempt, error)
                        .await?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn category_page_once(&self, url: &str) -> Result<CandidatePage, WikiError> {
        let text = self.http.get(url).send().await?.text().await?;
        decode_category_page(&text)
    }

    /// Raw wikitext of the entry titled `title`.
    ///
    /// # Errors
    ///
    /// [`WikiError::Malformed`] for undecodable responses or a missing
    /// `parse` object, [`WikiError::RetriesExhausted`] when a bounded policy
    /// gives up.
    pub async fn entry_wikitext(&self, title: &str) -> Result<String, WikiError> {
        let url = format!(
            "{}?action=parse&prop=wikitext&format=json&maxlag={}&page={}",
            self.wiktionary_api,
            self.maxlag,
            urlencoding::encode(title)
        );

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.entry_wikitext_once(&url).await {
                Ok(wikitext) => return Ok(wikitext),
                Err(error) if error.is_transient() => {
                    self.retry.backoff("parse", attempt, error).await?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn entry_wikitext_once(&self, url: &str) -> Result<String, WikiError> {
        let text = self.http.get(url).send().await?.text().await?;
        decode_entry_wikitext(&text)
    }
}

fn decode_category_page(text: &str) -> Result<CandidatePage, WikiError> {
    let data: CategoryResponse =
        serde_json::from_str(text).map_err(|error| WikiError::Malformed {
            api: "categorymembers",
            detail: error.to_string(),
        })?;
    if let Some(error) = data.error {
        return Err(WikiError::Overloaded {
            api: "categorymembers",
            detail: error.describe(),
        });
    }
    let query = data.query.ok_or(WikiError::Malformed {
        api: "categorymembers",
        detail: "response carries neither query nor error".to_string(),
    })?;
    Ok(CandidatePage {
        titles: query
            .categorymembers
            .into_iter()
            .map(|member| member.title)
            .collect(),
        continuation: data.continuation.and_then(|c| c.cmcontinue),
    })
}

fn decode_entry_wikitext(text: &str) -> Result<String, WikiError> {
    let data: ParseResponse = serde_json::from_str(text).map_err(|error| WikiError::Malformed {
        api: "parse",
        detail: error.to_string(),
    })?;
    if let Some(error) = data.error {
        return Err(WikiError::Overloaded {
            api: "parse",
            detail: error.describe(),
        });
    }
    let parse = data.parse.ok_or(WikiError::Malformed {
        api: "parse",
        detail: "response carries neither parse nor error".to_string(),
    })?;
    Ok(parse.wikitext.content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CATEGORY_FIXTURE: &str = r#"{
        "batchcomplete": "",
        "continue": {
            "cmcontinue": "page|474f|12345",
            "continue": "-||"
        },
        "query": {
            "categorymembers": [
                { "pageid": 1, "ns": 0, "title": "abandon" },
                { "pageid": 2, "ns": 0, "title": "abseil" }
            ]
        }
    }"#;

    const PARSE_FIXTURE: &str = r#"{
        "parse": {
            "title": "abseil",
            "pageid": 2,
            "wikitext": { "*": "==English==\n{{en-verb}}\n" }
        }
    }"#;

    const MAXLAG_FIXTURE: &str = r#"{
        "error": {
            "code": "maxlag",
            "info": "Waiting for a database server: 6 seconds lagged."
        }
    }"#;

    #[test]
    fn decodes_titles_and_continuation() {
        let page = decode_category_page(CATEGORY_FIXTURE).unwrap();
        assert_eq!(page.titles, vec!["abandon", "abseil"]);
        assert_eq!(page.continuation.as_deref(), Some("page|474f|12345"));
    }

    #[test]
    fn last_page_has_no_continuation() {
        let text = r#"{"query": {"categorymembers": [{"title": "zigzag"}]}}"#;
        let page = decode_category_page(text).unwrap();
        assert_eq!(page.titles, vec!["zigzag"]);
        assert_eq!(page.continuation, None);
    }

    #[test]
    fn maxlag_is_transient() {
        let error = decode_category_page(MAXLAG_FIXTURE).unwrap_err();
        assert!(error.is_transient());
        assert!(error.to_string().contains("maxlag"));
    }

    #[test]
    fn category_garbage_is_malformed() {
        let error = decode_category_page("<html>varnish error</html>").unwrap_err();
        assert!(!error.is_transient());
        assert!(matches!(error, WikiError::Malformed { .. }));
    }

    #[test]
    fn empty_object_is_malformed_not_transient() {
        let error = decode_category_page("{}").unwrap_err();
        assert!(matches!(error, WikiError::Malformed { .. }));
    }

    #[test]
    fn decodes_entry_wikitext() {
        let wikitext = decode_entry_wikitext(PARSE_FIXTURE).unwrap();
        assert_eq!(wikitext, "==English==\n{{en-verb}}\n");
    }

    #[test]
    fn parse_maxlag_is_transient() {
        let error = decode_entry_wikitext(MAXLAG_FIXTURE).unwrap_err();
        assert!(error.is_transient());
    }

    #[test]
    fn parse_without_body_is_malformed() {
        let error = decode_entry_wikitext("{}").unwrap_err();
        assert!(matches!(
            error,
            WikiError::Malformed { api: "parse", .. }
        ));
    }
}
