//! The persisted exclusion list.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lex_core::errors::StoreError;
use lex_core::lemma::MIN_LEMMA_LEN;
use lex_core::rejection::RejectionRecord;
use lex_core::source::ExclusionLog;

/// Newline-delimited list of lemmas rejected on earlier passes.
///
/// Loaded once at startup into a set; [`ExclusionLog::record`] appends one
/// line per new lemma and never rewrites the file, so a crash mid-run cannot
/// lose rejections that were already on disk.
#[derive(Debug)]
pub struct ExclusionFile {
    path: PathBuf,
    lemmas: HashSet<String>,
}

impl ExclusionFile {
    /// Load the list at `path`. A missing file is an empty list (first run).
    ///
    /// # Errors
    ///
    /// [`StoreError::Read`] when the file exists but cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let lemmas = match std::fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .filter(|line| line.len() >= MIN_LEMMA_LEN)
                .map(str::to_string)
                .collect(),
            Err(error) if error.kind() == io::ErrorKind::NotFound => HashSet::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        tracing::debug!(path = %path.display(), count = lemmas.len(), "loaded exclusion list");
        Ok(Self { path, lemmas })
    }

    /// In-memory list with no backing file, for tests and dry runs.
    #[must_use]
    pub fn in_memory(lemmas: impl IntoIterator<Item = String>) -> Self {
        Self {
            path: PathBuf::new(),
            lemmas: lemmas.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
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

impl ExclusionLog for ExclusionFile {
    fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains(lemma)
    }

    fn record(&mut self, rejection: &RejectionRecord) -> Result<(), StoreError> {
        if !self.lemmas.insert(rejection.lemma.clone()) {
            return Ok(());
        }
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        let append = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", rejection.lemma));
        append.map_err(|source| StoreError::Append {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(lemma = %rejection.lemma, reason = %rejection.reason, "recorded exclusion");
        Ok(())
    }
}
