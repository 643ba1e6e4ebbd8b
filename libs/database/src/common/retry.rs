use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Tuning knobs for [`retry_with_backoff`].
///
/// The defaults (3 retries, 100ms initial delay doubling up to 5s, jitter
/// on) suit connection establishment during startup; override individual
/// knobs with the builder methods.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt fails
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Ceiling the backoff never exceeds, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor between consecutive delays
    pub backoff_multiplier: f64,

    /// Randomize each delay to 50-100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The total number of attempts is `max_retries + 1`. Delays grow by
/// `backoff_multiplier` per failure, capped at `max_delay_ms`, and the
/// final error is returned unchanged.
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let db = retry_with_backoff(
///     || database::postgres::connect(&db_url),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut remaining = config.max_retries;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(value) => {
                if remaining < config.max_retries {
                    debug!(
                        "Operation succeeded after {} retries",
                        config.max_retries - remaining
                    );
                }
                return Ok(value);
            }
            Err(e) if remaining == 0 => {
                warn!(
                    "Operation failed, retry budget of {} exhausted: {}",
                    config.max_retries, e
                );
                return Err(e);
            }
            Err(e) => {
                remaining -= 1;

                let wait = if config.use_jitter {
                    jittered(delay_ms)
                } else {
                    delay_ms
                };

                debug!(
                    "Operation failed ({} retries left): {}. Next attempt in {}ms",
                    remaining, e, wait
                );

                tokio::time::sleep(Duration::from_millis(wait)).await;

                delay_ms = ((delay_ms as f64 * config.backoff_multiplier) as u64)
                    .min(config.max_delay_ms);
            }
        }
    }
}

/// Shrink a delay to a random 50-100% of its nominal value so a fleet of
/// restarting clients does not reconnect in lockstep.
fn jittered(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    // RandomState's per-instance keys are the entropy source; no rand dep
    let entropy = RandomState::new().hash_one(std::time::Instant::now());
    let percent = 50 + entropy % 51;

    delay_ms * percent / 100
}
