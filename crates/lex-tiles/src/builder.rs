//! Draws queue lemmas and turns them into review tiles.

use lex_core::rejection::{RejectionReason, RejectionRecord};
use lex_core::source::{ExclusionLog, ExistenceIndex};
use lex_infer::Conjugator;
use lex_store::PendingQueue;

use crate::error::TileError;
use crate::model::Tile;

/// The review pipeline's task builder.
///
/// Each [`next_tile`](Self::next_tile) call draws random queue lemmas until
/// one survives both gates: the conjugator must produce forms whose
/// infinitive equals the lemma, and the existence index must not know the
/// term yet. Lemmas failing a gate land on the exclusion log and the draw
/// continues, so an exhausted queue is the only way to get `None`.
#[derive(Debug)]
pub struct TileBuilder<X, C, L> {
    index: X,
    conjugator: C,
    exclusions: L,
    queue: PendingQueue,
    language: String,
}

impl<X, C, L> TileBuilder<X, C, L>
where
    X: ExistenceIndex,
    C: Conjugator,
    L: ExclusionLog,
{
    pub fn new(
        index: X,
        conjugator: C,
        exclusions: L,
        queue: PendingQueue,
        language: impl Into<String>,
    ) -> Self {
        Self {
            index,
            conjugator,
            exclusions,
            queue,
            language: language.into(),
        }
    }

    /// The next reviewable tile, or `None` once the queue is drained.
    ///
    /// # Errors
    ///
    /// [`TileError`] when the existence index fails past its retry policy or
    /// the exclusion log cannot be extended.
    pub async fn next_tile(&mut self) -> Result<Option<Tile>, TileError> {
        while let Some(verb) = self.queue.draw() {
            let forms = match self.conjugator.conjugate(&verb) {
                Some(forms) if forms.infinitive == verb => forms,
                _ => {
                    self.reject(&verb, RejectionReason::NoConjugation)?;
                    continue;
                }
            };
            if self.index.exists(&verb, &self.language).await? {
                self.reject(&verb, RejectionReason::AlreadyExists)?;
                continue;
            }
            return Ok(Some(Tile::for_verb(&verb, &forms)));
        }
        Ok(None)
    }

    /// Record a reviewer's reject decision for `verb`.
    ///
    /// # Errors
    ///
    /// [`TileError::Store`] when the exclusion log cannot be extended.
    pub fn reject_reviewed(&mut self, verb: &str) -> Result<(), TileError> {
        tracing::info!(verb, "reviewer rejected");
        self.exclusions
            .record(&RejectionRecord::new(verb, RejectionReason::ReviewerRejected))?;
        Ok(())
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The exclusion log, for inspection and shutdown flushing.
    #[must_use]
    pub fn exclusions(&self) -> &L {
        &self.exclusions
    }

    fn reject(&mut self, verb: &str, reason: RejectionReason) -> Result<(), TileError> {
        tracing::warn!(verb, %reason, "dropped from review queue");
        self.exclusions
            .record(&RejectionRecord::new(verb, reason))?;
        Ok(())
    }
}
