// 3rd party crates
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::{debug, trace};

// Current module imports
use super::constants::DEFAULT_SLACK;
use super::errors::RateLimitError;
use super::traits::RateLimiter;
use super::types::{LeakyBucketRateLimiter, RateLimitConfig};

impl RateLimitConfig {
    /// Create a configuration for `requests_per_second` with the default slack.
    pub fn new(requests_per_second: u32) -> Self {
        Self {
            requests_per_second,
            slack: DEFAULT_SLACK,
        }
    }

    pub fn validate(&self) -> Result<(), RateLimitError> {
        if self.requests_per_second == 0 {
            return Err(RateLimitError::InvalidRate(self.requests_per_second));
        }

        Ok(())
    }
}

impl LeakyBucketRateLimiter {
    /// Create a new leaky bucket rate limiter admitting at most
    /// `requests_per_second` callers per second.
    pub fn new(requests_per_second: u32) -> Result<Self, RateLimitError> {
        Self::from_config(RateLimitConfig::new(requests_per_second))
    }

    /// Create a new leaky bucket rate limiter from a full configuration.
    pub fn from_config(config: RateLimitConfig) -> Result<Self, RateLimitError> {
        config.validate()?;

        let period = Duration::from_secs(1) / config.requests_per_second;

        debug!(
            requests_per_second = config.requests_per_second,
            slack = config.slack,
            ?period,
            "Created leaky bucket rate limiter"
        );

        Ok(Self {
            period,
            max_slack: period * config.slack,
            // The first slot is already due, so the first caller is
            // admitted without delay.
            next_admission: Mutex::new(Instant::now()),
        })
    }
}

#[async_trait]
impl RateLimiter for LeakyBucketRateLimiter {
    async fn take(&self) {
        let deadline = {
            let mut next = self.next_admission.lock().await;
            let now = Instant::now();

            let mut deadline = *next;
            if now > deadline + self.max_slack {
                // The schedule fell further behind the present than the
                // slack bound allows; forfeit the excess credit so an idle
                // gap cannot turn into an unthrottled burst.
                deadline = now - self.max_slack;
            }

            // Reserve this slot before releasing the lock. Every caller
            // sees a strictly later deadline than the one before it.
            *next = deadline + self.period;

            let wait = deadline.duration_since(now);
            if !wait.is_zero() {
                trace!(?wait, "Delaying admission");
            }

            deadline
        };

        // Sleep outside the lock: waiters delay only themselves.
        sleep_until(deadline).await;
    }
}
