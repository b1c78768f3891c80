//! Cross-cutting error types for lexlift.
//!
//! This module defines failures that any collaborator or store can surface.
//! Domain-specific errors (e.g., `WikiError`, `CrawlError`) are defined in
//! their respective crates; a unified error is deferred to `lex-cli` where
//! all crate errors converge.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of an external collaborator, observed after its retry policy has
/// given up or declined to retry.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream service is shedding load and retries ran out.
    #[error("upstream overloaded: {0}")]
    Overloaded(String),

    /// The response could not be understood. The upstream contract changed,
    /// so the run halts instead of retrying.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// Catch-all for collaborator implementations.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure to read or extend an on-disk word list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The list could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The list could not be appended to.
    #[error("failed to append to {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
