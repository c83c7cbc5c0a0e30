//! Retry configuration for transient failures.

use std::time::Duration;

/// Configuration for retry behavior on transient failures.
///
/// The transport retries a request when the response status is above 499 or
/// the request failed with a connect/timeout error, sleeping between
/// attempts with plain exponential backoff and no jitter: the delay before
/// attempt `n + 1` is `base_delay * multiplier^(n-1)`, which with the
/// defaults is 1s, 2s, 4s, ...
///
/// ## Default Values
///
/// - `max_tries`: 10 (total attempts, including the first)
/// - `base_delay`: 1s
/// - `multiplier`: 2.0
///
/// ## Example
///
/// ```rust
/// use kbc_manage::RetryConfig;
/// use std::time::Duration;
///
/// let config = RetryConfig::new()
///     .with_max_tries(3)
///     .with_base_delay(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the initial one.
    pub max_tries: u32,

    /// Delay before the first retry.
    pub base_delay: Duration,

    /// Multiplier for exponential backoff.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_tries: 10,
            base_delay: Duration::from_secs(1),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Creates a new retry configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that disables retries.
    pub fn disabled() -> Self {
        Self {
            max_tries: 1,
            ..Default::default()
        }
    }

    /// Sets the maximum number of attempts, including the initial one.
    ///
    /// Values below 1 are treated as 1 (the request is always sent once).
    #[must_use]
    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries.max(1);
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Sets the exponential backoff multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Calculates the delay to sleep after a failed attempt.
    ///
    /// `attempt` counts from 1 for the initial request. The delay is
    /// `base_delay * multiplier^(attempt-1)`, so with the defaults the
    /// first retry comes after 1s, the second after 2s, and so on.
    /// Attempt 0 yields a zero delay; the result is never negative and
    /// saturates at `Duration::MAX` when the exponentiation overflows.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let secs = self.base_delay.as_secs_f64() * self.multiplier.powi(attempt as i32 - 1);
        Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RetryConfig::default();
        assert_eq!(config.max_tries, 10);
        assert_eq!(config.base_delay, Duration::from_secs(1));
        assert_eq!(config.multiplier, 2.0);
    }

    #[test]
    fn test_disabled() {
        let config = RetryConfig::disabled();
        assert_eq!(config.max_tries, 1);
    }

    #[test]
    fn test_builder() {
        let config = RetryConfig::new()
            .with_max_tries(5)
            .with_base_delay(Duration::from_millis(200))
            .with_multiplier(3.0);

        assert_eq!(config.max_tries, 5);
        assert_eq!(config.base_delay, Duration::from_millis(200));
        assert_eq!(config.multiplier, 3.0);
    }

    #[test]
    fn test_max_tries_floor() {
        let config = RetryConfig::new().with_max_tries(0);
        assert_eq!(config.max_tries, 1);
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let config = RetryConfig::default();

        assert_eq!(config.delay_for_attempt(0), Duration::ZERO);
        assert_eq!(config.delay_for_attempt(1), Duration::from_secs(1));
        assert_eq!(config.delay_for_attempt(2), Duration::from_secs(2));
        assert_eq!(config.delay_for_attempt(3), Duration::from_secs(4));
        assert_eq!(config.delay_for_attempt(4), Duration::from_secs(8));
    }

    #[test]
    fn test_delay_scales_with_base() {
        let config = RetryConfig::new().with_base_delay(Duration::from_millis(100));

        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(200));
        assert_eq!(config.delay_for_attempt(3), Duration::from_millis(400));
    }

    #[test]
    fn test_delay_never_negative() {
        // A zero base delay must still clamp at zero for every attempt.
        let config = RetryConfig::new().with_base_delay(Duration::ZERO);
        for attempt in 0..5 {
            assert!(config.delay_for_attempt(attempt) >= Duration::ZERO);
        }
    }

    #[test]
    fn test_delay_saturates_on_overflow() {
        // 2^1999 seconds overflows Duration; the delay saturates instead
        // of panicking.
        let config = RetryConfig::default();
        assert_eq!(config.delay_for_attempt(2000), Duration::MAX);
    }
}
