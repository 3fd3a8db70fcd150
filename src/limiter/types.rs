// 3rd party crates
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Pacing configuration for a leaky bucket limiter
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum number of admissions per second
    pub requests_per_second: u32,
    /// Periods of unused capacity retained across an idle gap.
    ///
    /// After the limiter has sat idle, up to `slack + 1` calls are admitted
    /// back-to-back before steady pacing resumes. `0` disables catch-up
    /// entirely. Defaults to [`DEFAULT_SLACK`](super::constants::DEFAULT_SLACK).
    #[serde(default = "super::constants::default_slack")]
    pub slack: u32,
}

/// A leaky bucket rate limiter implementation.
///
/// Releases one admission per period, tracked as the scheduled time of the
/// next admission. The schedule is the single piece of shared mutable state;
/// it is only ever touched under the mutex inside `take`.
pub struct LeakyBucketRateLimiter {
    pub(crate) period: Duration,
    pub(crate) max_slack: Duration,
    pub(crate) next_admission: Mutex<Instant>,
}
