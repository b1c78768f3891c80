//! # lex-infer
//!
//! Verb-form inference for lexlift.
//!
//! This crate turns dictionary markup into inflected forms:
//! - [`wikitext`] extracts `{{en-verb}}` invocations from raw entry text
//! - [`engine`] derives the five forms from a template's positional
//!   shorthand and named overrides
//! - [`conjugate`] guesses forms for queue lemmas that have no template

pub mod conjugate;
pub mod engine;
pub mod error;
pub mod wikitext;

pub use conjugate::{Conjugator, RuleConjugator};
pub use engine::infer_forms;
pub use error::InferenceError;
pub use wikitext::extract_conjugations;
