//! Retry logic with linear backoff.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::error::{ClientError, ClientResult};

/// Retry policy with linear backoff.
///
/// Every failure is retried until the attempt budget runs out; the
/// caller sees either the first success or an aggregated
/// [`ClientError::RetriesExhausted`] embedding the last error.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt)
    max_attempts: u32,
    /// Base delay between retries
    base_delay: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Create from retry config.
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_delay: config.base_delay,
        }
    }

    /// Calculate the delay for a given attempt (0-indexed).
    ///
    /// Linear backoff: `base_delay * attempt`, so the wait before the
    /// second attempt is 1x the base, before the third 2x, and so on.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Execute an async operation with retry logic.
    ///
    /// Returns the first successful result. All failures are retried;
    /// after the attempt budget is exhausted the last error is folded
    /// into [`ClientError::RetriesExhausted`].
    pub async fn execute<F, Fut, T>(&self, operation_name: &'static str, mut operation: F) -> ClientResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..self.max_attempts {
            // Wait before retry (no wait for first attempt)
            let delay = self.delay_for_attempt(attempt);
            if !delay.is_zero() {
                debug!(operation = operation_name, attempt, ?delay, "Retrying after delay");
                sleep(delay).await;
            }

            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    warn!(
                        operation = operation_name,
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "Attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        let last = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts were made".to_string());
        Err(ClientError::RetriesExhausted {
            attempts: self.max_attempts,
            last,
        })
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
