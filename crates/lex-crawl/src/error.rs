//! Crawl error types.
//!
//! Everything here is fatal to the run: recoverable per-lemma conditions
//! never become a `CrawlError`, they become a `RejectionRecord` and the
//! crawl moves on.

use std::io;

use lex_core::errors::{SourceError, StoreError};
use thiserror::Error;

/// A failure that aborts the crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// An external collaborator failed past its retry policy, or its
    /// response no longer matches the expected contract.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The exclusion log could not be extended.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The record stream could not be written.
    #[error("failed to write output record: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_convert() {
        let error = CrawlError::from(SourceError::Malformed("no query object".to_string()));
        assert!(error.to_string().contains("malformed upstream response"));
    }

    #[test]
    fn output_errors_name_the_record_stream() {
        let error = CrawlError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(error.to_string().contains("output record"));
    }
}
