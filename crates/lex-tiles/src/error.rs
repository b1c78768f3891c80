//! Tile pipeline error types.

use lex_core::errors::{SourceError, StoreError};
use thiserror::Error;

/// Failures of the tile builder or server.
#[derive(Debug, Error)]
pub enum TileError {
    /// The existence index failed past its retry policy.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The exclusion log could not be extended.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The HTTP listener could not be started.
    #[error("failed to bind tile server: {0}")]
    Bind(String),

    /// The accept loop died.
    #[error("tile server failed: {0}")]
    Serve(String),
}
