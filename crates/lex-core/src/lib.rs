//! # lex-core
//!
//! Core types and collaborator interfaces for lexlift.
//!
//! This crate provides the foundational types shared across all lexlift crates:
//! - Candidate lemma validation
//! - Conjugation template and inflected-form structs
//! - The rejection taxonomy and exclusion record type
//! - Collaborator traits for the listing, the existence index, the
//!   dictionary, and the exclusion log
//! - Cross-cutting error types

pub mod errors;
pub mod forms;
pub mod lemma;
pub mod rejection;
pub mod source;
pub mod template;

pub use errors::{SourceError, StoreError};
pub use forms::{InflectionSet, RECORD_SEPARATOR};
pub use rejection::{RejectionReason, RejectionRecord};
pub use source::{CandidatePage, CandidateSource, DictionarySource, ExclusionLog, ExistenceIndex};
pub use template::ConjugationTemplate;
