//! Leaky Bucket Limiter Module
//!
//! This module provides the admission gate that paces outbound requests.
//! Callers await [`RateLimiter::take`], which suspends the calling task
//! until the next admission slot comes due, then returns. Admissions are
//! released at a steady cadence of one per period, smoothing bursts
//! instead of rejecting them.
//!
//! # Architecture
//!
//! The module is organized into several components:
//! - The [`RateLimiter`] trait that consumers pace against
//! - The [`LeakyBucketRateLimiter`] implementation and its schedule state
//! - Configuration with validation at construction time
//! - Error handling for invalid configuration

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::RateLimitError;
pub use traits::RateLimiter;
pub use types::{LeakyBucketRateLimiter, RateLimitConfig};
