/// Default settings
pub const DEFAULT_SLACK: u32 = 10;

/// serde default hook for [`RateLimitConfig::slack`](super::types::RateLimitConfig)
pub(crate) fn default_slack() -> u32 {
    DEFAULT_SLACK
}
