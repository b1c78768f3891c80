//! The pending-verb queue feeding the review pipeline.

use std::io;
use std::path::PathBuf;

use lex_core::errors::StoreError;
use lex_core::lemma::MIN_LEMMA_LEN;
use lex_core::source::ExclusionLog;
use rand::Rng;

/// Pre-vetted candidate lemmas awaiting human review.
///
/// Loaded from a newline-delimited file, minus anything the exclusion log
/// already holds. Each draw removes a uniformly random entry, so reviewers
/// do not all see the queue in file order.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    lemmas: Vec<String>,
}

impl PendingQueue {
    /// Load the queue at `path`, dropping short lines and excluded lemmas.
    /// A missing file is an empty queue.
    ///
    /// # Errors
    ///
    /// [`StoreError::Read`] when the file exists but cannot be read.
    pub fn load(
        path: impl Into<PathBuf>,
        exclusions: &impl ExclusionLog,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let lemmas: Vec<String> = match std::fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .filter(|line| line.len() >= MIN_LEMMA_LEN)
                .filter(|line| !exclusions.contains(line))
                .map(str::to_string)
                .collect(),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        tracing::info!(path = %path.display(), pending = lemmas.len(), "loaded pending verbs");
        Ok(Self { lemmas })
    }

    /// Queue over the given lemmas, unfiltered.
    #[must_use]
    pub fn from_lemmas(lemmas: impl IntoIterator<Item = String>) -> Self {
        Self {
            lemmas: lemmas.into_iter().collect(),
        }
    }

    /// Remove and return a uniformly random lemma, or `None` when empty.
    pub fn draw(&mut self) -> Option<String> {
        if self.lemmas.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.lemmas.len());
        Some(self.lemmas.swap_remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}
