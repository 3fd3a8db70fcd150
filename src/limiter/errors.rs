// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("Requests per second must be greater than 0, got {0}")]
    InvalidRate(u32),
}
