//! Leaky-bucket rate-limited HTTP client.
//!
//! Wraps a generic HTTP transport so that outbound requests are *dispatched*
//! at a bounded rate. Callers over the cap are not rejected; they are
//! suspended and released one per period, smoothing bursts into a steady
//! cadence. Clones of a client share one admission schedule, so a worker
//! pool holding many handles still observes a single global rate.
//!
//! The default transport is [`reqwest::Client`]; anything implementing
//! [`HttpTransport`] can be substituted.
//!
//! # Example
//!
//! ```no_run
//! use leaky_client::LeakyClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // At most 4 requests per second, however many tasks are sending.
//!     let client = LeakyClient::new(4)?;
//!
//!     let response = client.get("https://httpbin.org/get").await?;
//!     println!("{}", response.status());
//!
//!     Ok(())
//! }
//! ```

// Project modules
pub mod client;
pub mod limiter;

// Project exports
pub use client::{HttpTransport, LeakyClient};
pub use limiter::{LeakyBucketRateLimiter, RateLimitConfig, RateLimitError, RateLimiter};
