use std::future::Future;
use std::time::Duration;

use crate::core::BriefError;

/// Specifies the backoff strategy for retrying failed operations.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`, capped at `max`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    /// Delay before the retry following zero-indexed `attempt`.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let scaled = base.mul_f64(factor.powi(attempt.min(i32::MAX as u32) as i32));
                scaled.min(*max)
            }
        }
    }
}

/// Configuration for the automatic retry mechanism, applied uniformly to
/// every network-bound operation (market data, news, LLM call, mail send).
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries. The total number of attempts will be
    /// `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(1000),
                factor: 2.0,
                max: Duration::from_secs(30),
            },
        }
    }
}

impl RetryConfig {
    /// A policy that makes exactly one attempt.
    #[must_use]
    pub fn no_retries() -> Self {
        Self {
            enabled: false,
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Drive a single-shot remote operation through the retry policy.
///
/// `op` is invoked once per attempt. Errors for which
/// [`BriefError::is_transient`] is false propagate immediately; transient
/// errors sleep for the backoff delay and re-attempt, up to
/// `cfg.max_retries` retries. Once retries are exhausted the last error is
/// propagated unchanged.
///
/// The wrapper assumes each attempt either fully fails before causing a side
/// effect or targets a system tolerant of duplicates; it does not verify
/// idempotency itself.
pub async fn with_retry<T, F, Fut>(cfg: &RetryConfig, mut op: F) -> Result<T, BriefError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, BriefError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !cfg.enabled || !err.is_transient() || attempt >= cfg.max_retries {
                    return Err(err);
                }
                let delay = cfg.backoff.delay(attempt);
                tracing::debug!(
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "transient failure, backing off before retry"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
