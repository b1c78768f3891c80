//! # lex-crawl
//!
//! The crawl pipeline: page through a candidate listing, gate each title
//! through the validator, the exclusion log and the existence index, then
//! run survivors through the form inference engine and emit one record line
//! per accepted lemma.

pub mod crawler;
pub mod error;

pub use crawler::{CrawlReport, Crawler};
pub use error::CrawlError;
