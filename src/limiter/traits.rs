// 3rd party crates
use async_trait::async_trait;

/// Rate limiter trait for implementing different pacing strategies
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Suspend the calling task until the next admission slot, then return.
    ///
    /// This operation cannot fail; it only delays. Concurrent callers are
    /// serialized so that each one is released into a distinct slot.
    async fn take(&self);
}
