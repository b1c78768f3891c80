//! Retry policy for transient upstream failures.
//!
//! The crawl is meant to run unattended until the listing is exhausted, so
//! the production default retries forever with a fixed pause. Bounded
//! policies exist so tests (and cautious operators) can cap the loop.

use std::num::NonZeroU32;
use std::time::Duration;

use crate::error::WikiError;

/// How a client call behaves when the upstream sheds load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Fixed pause between attempts.
    pub delay: Duration,
    /// Attempt cap; `None` retries forever.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded(Duration::from_secs(10))
    }
}

impl RetryPolicy {
    /// Retry forever with a fixed `delay` between attempts.
    #[must_use]
    pub const fn unbounded(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Give up after `attempts` tries. Zero behaves as one.
    #[must_use]
    pub fn limited(attempts: u32, delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: Some(NonZeroU32::new(attempts).unwrap_or(NonZeroU32::MIN)),
        }
    }

    /// React to a transient failure on attempt number `attempt` (1-based).
    ///
    /// Sleeps for the configured delay and returns `Ok(())` when the caller
    /// should try again.
    ///
    /// # Errors
    ///
    /// [`WikiError::RetriesExhausted`] once a bounded policy runs out of
    /// attempts.
    pub(crate) async fn backoff(
        &self,
        what: &'static str,
        attempt: u32,
        error: WikiError,
    ) -> Result<(), WikiError> {
        if let Some(max) = self.max_attempts {
            if attempt >= max.get() {
                return Err(WikiError::RetriesExhausted {
                    what,
                    attempts: attempt,
                    source: Box::new(error),
                });
            }
        }
        tracing::warn!(
            %error,
            what,
            attempt,
            delay_secs = self.delay.as_secs_f64(),
            "transient upstream failure, backing off"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
