//! Rate Limited Client Module
//!
//! This module provides [`LeakyClient`], a decorator over a generic HTTP
//! transport. Every outbound dispatch first awaits an admission slot from a
//! shared [`RateLimiter`](crate::limiter::RateLimiter), then delegates to
//! the transport unchanged. The client adds no buffering, no validation and
//! no error handling of its own; whatever the transport returns is returned
//! to the caller verbatim.
//!
//! Transports are described by the [`HttpTransport`] trait; the default
//! collaborator is [`reqwest::Client`].

pub mod impls;
pub mod traits;
pub mod types;

pub use traits::HttpTransport;
pub use types::LeakyClient;
