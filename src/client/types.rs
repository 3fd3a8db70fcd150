// Standard library
use std::sync::Arc;

// 3rd party crates
use reqwest::Client;

// Project imports
use crate::limiter::RateLimiter;

// Current module imports
use super::traits::HttpTransport;

/// A leaky-bucket rate-limited HTTP client.
///
/// Wraps a transport so that every outbound dispatch first takes an
/// admission slot from a shared limiter. Cloning is cheap and every clone
/// paces against the *same* schedule, so handing copies to many tasks still
/// enforces one global rate.
#[derive(Clone)]
pub struct LeakyClient<T = Client>
where
    T: HttpTransport,
{
    pub(crate) limiter: Arc<dyn RateLimiter>,
    pub(crate) transport: T,
}
