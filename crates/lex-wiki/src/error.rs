//! Wiki client error types.

use lex_core::errors::SourceError;
use thiserror::Error;

/// Errors from the Wiktionary/Wikidata clients.
#[derive(Debug, Error)]
pub enum WikiError {
    /// HTTP transport failure. Transient: the retry loop re-issues the call.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API reported lag or an error envelope. Transient.
    #[error("{api} overloaded: {detail}")]
    Overloaded { api: &'static str, detail: String },

    /// The response could not be decoded; the upstream contract changed.
    /// Never retried.
    #[error("malformed {api} response: {detail}")]
    Malformed { api: &'static str, detail: String },

    /// A bounded retry policy gave up.
    #[error("{what} still failing after {attempts} attempts: {source}")]
    RetriesExhausted {
        what: &'static str,
        attempts: u32,
        #[source]
        source: Box<WikiError>,
    },
}

impl WikiError {
    /// Whether the retry loop should re-issue the call.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Overloaded { .. })
    }
}

impl From<WikiError> for SourceError {
    fn from(error: WikiError) -> Self {
        match error {
            WikiError::Malformed { .. } => Self::Malformed(error.to_string()),
            WikiError::Overloaded { .. } | WikiError::RetriesExhausted { .. } => {
                Self::Overloaded(error.to_string())
            }
            WikiError::Http(_) => Self::Other(anyhow::Error::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overload_and_transport_are_transient() {
        let overloaded = WikiError::Overloaded {
            api: "wbsearchentities",
            detail: "lagged".to_string(),
        };
        assert!(overloaded.is_transient());
    }

    #[test]
    fn malformed_and_exhausted_are_final() {
        let malformed = WikiError::Malformed {
            api: "parse",
            detail: "expected value".to_string(),
        };
        assert!(!malformed.is_transient());

        let exhausted = WikiError::RetriesExhausted {
            what: "categorymembers",
            attempts: 3,
            source: Box::new(WikiError::Overloaded {
                api: "categorymembers",
                detail: "lagged".to_string(),
            }),
        };
        assert!(!exhausted.is_transient());
    }

    #[test]
    fn malformed_converts_to_fatal_source_error() {
        let error = WikiError::Malformed {
            api: "wbsearchentities",
            detail: "expected value at line 1".to_string(),
        };
        let source: SourceError = error.into();
        assert!(matches!(source, SourceError::Malformed(_)));
    }

    #[test]
    fn exhaustion_converts_to_overloaded_source_error() {
        let error = WikiError::RetriesExhausted {
            what: "parse",
            attempts: 5,
            source: Box::new(WikiError::Overloaded {
                api: "parse",
                detail: "lagged".to_string(),
            }),
        };
        let source: SourceError = error.into();
        assert!(matches!(source, SourceError::Overloaded(_)));
        assert!(source.to_string().contains("after 5 attempts"));
    }
}
