use std::future::Future;
use std::time::Duration;
use bento_core::Result;
use tracing::{error, warn};

/// Fixed exponential backoff: `initial_delay`, then doubling, for at most
/// `max_retries` extra attempts. No jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (zero-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.initial_delay
            .saturating_mul(2u32.saturating_pow(retry))
    }
}

/// Runs `operation` until it succeeds or the policy is exhausted; the last
/// error is returned. Each attempt completes before the next is scheduled.
pub async fn retry_with_backoff<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut retry = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if retry >= policy.max_retries => {
                error!("❌ Giving up after {} attempts: {}", retry + 1, e);
                return Err(e);
            }
            Err(e) => {
                let delay = policy.delay_for(retry);
                warn!(
                    "⚠️ Attempt {} failed, retrying in {}ms: {}",
                    retry + 1,
                    delay.as_millis(),
                    e
                );
                tokio::time::sleep(delay).await;
                retry += 1;
            }
        }
    }
}
