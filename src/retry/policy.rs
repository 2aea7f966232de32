use std::time::Duration;

/// Exponential backoff policy for [`retry_with_backoff`](super::retry_with_backoff).
///
/// Immutable for the duration of one executor invocation. The delay before
/// attempt `k` (k >= 2) is `base_delay * factor^(k-2)`; there is no jitter
/// and no upper delay cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first). Must be >= 1.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub base_delay: Duration,
    /// Multiplier applied per subsequent attempt. Must be >= 1.0.
    pub factor: f64,
}

/// The product default: three attempts, one second base delay, doubling.
///
/// Kept as the single named default so call sites override a value instead
/// of re-stating literals.
impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            factor: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay to suspend for after `attempts_made` failed attempts (1-based):
    /// `base_delay * factor^(attempts_made - 1)`.
    pub fn backoff_delay(&self, attempts_made: u32) -> Duration {
        debug_assert!(attempts_made >= 1, "attempts_made is 1-based");
        let exp = attempts_made.saturating_sub(1).min(i32::MAX as u32) as i32;
        self.base_delay.mul_f64(self.factor.powi(exp))
    }

    /// Panics when the policy parameters are out of range. Violations are
    /// programming errors and must fail fast, never be retried.
    pub(crate) fn assert_valid(&self) {
        assert!(self.max_attempts >= 1, "RetryPolicy.max_attempts must be >= 1");
        assert!(self.factor >= 1.0, "RetryPolicy.factor must be >= 1.0");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_named_product_policy() {
        let p = RetryPolicy::default();
        assert_eq!(p.max_attempts, 3);
        assert_eq!(p.base_delay, Duration::from_millis(1000));
        assert_eq!(p.factor, 2.0);
    }

    #[test]
    fn backoff_delay_grows_geometrically() {
        let p = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(250),
            factor: 2.0,
        };
        assert_eq!(p.backoff_delay(1), Duration::from_millis(250));
        assert_eq!(p.backoff_delay(2), Duration::from_millis(500));
        assert_eq!(p.backoff_delay(3), Duration::from_millis(1000));
        assert_eq!(p.backoff_delay(4), Duration::from_millis(2000));
    }

    #[test]
    fn factor_one_keeps_delay_constant() {
        let p = RetryPolicy {
            max_attempts: 10,
            base_delay: Duration::from_millis(100),
            factor: 1.0,
        };
        assert_eq!(p.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(p.backoff_delay(7), Duration::from_millis(100));
    }

    #[test]
    fn zero_base_delay_stays_zero() {
        let p = RetryPolicy {
            max_attempts: 4,
            base_delay: Duration::ZERO,
            factor: 3.0,
        };
        assert_eq!(p.backoff_delay(1), Duration::ZERO);
        assert_eq!(p.backoff_delay(3), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "max_attempts")]
    fn zero_attempts_is_rejected() {
        let p = RetryPolicy {
            max_attempts: 0,
            base_delay: Duration::ZERO,
            factor: 1.0,
        };
        p.assert_valid();
    }

    #[test]
    #[should_panic(expected = "factor")]
    fn shrinking_factor_is_rejected() {
        let p = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(10),
            factor: 0.5,
        };
        p.assert_valid();
    }
}
