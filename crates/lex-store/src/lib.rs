//! # lex-store
//!
//! On-disk word lists for lexlift:
//! - [`ExclusionFile`] — the append-only list of rejected lemmas, consulted
//!   so later passes skip them
//! - [`PendingQueue`] — pre-vetted candidate lemmas for the review pipeline,
//!   drawn at random one tile at a time
//!
//! Both are newline-delimited flat files; lines shorter than two characters
//! are noise (blank lines, stray separators) and dropped on load.

pub mod exclusion;
pub mod queue;

pub use exclusion::ExclusionFile;
pub use queue::PendingQueue;
