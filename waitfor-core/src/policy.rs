//! Poll policy
//!
//! Retry interval and optional attempt limit for the readiness poller.
//! The defaults (one second, no limit) keep the poller a pure startup
//! barrier: it gives up only when an outer supervisor kills the process.

use std::time::Duration;

use crate::error::PolicyError;

/// Default delay between two probe attempts
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Retry policy for [`crate::ReadinessPoller`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Fixed delay after each transient failure
    pub interval: Duration,

    /// Maximum number of probe attempts, `None` retries forever
    pub max_attempts: Option<u32>,
}

impl PollPolicy {
    /// Creates an unbounded policy with the given interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    /// Limits the number of probe attempts
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Returns true if `attempts` has reached the configured limit
    pub fn is_exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }

    /// Validates the policy
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.interval.is_zero() {
            return Err(PolicyError::ZeroInterval(self.interval));
        }

        if self.max_attempts == Some(0) {
            return Err(PolicyError::ZeroMaxAttempts);
        }

        Ok(())
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(1));
        assert_eq!(policy.max_attempts, None);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_policy_validation() {
        let policy = PollPolicy::new(Duration::ZERO);
        assert_eq!(
            policy.validate(),
            Err(PolicyError::ZeroInterval(Duration::ZERO))
        );

        let policy = PollPolicy::default().with_max_attempts(0);
        assert_eq!(policy.validate(), Err(PolicyError::ZeroMaxAttempts));

        let policy = PollPolicy::new(Duration::from_millis(250)).with_max_attempts(3);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_exhaustion() {
        let unbounded = PollPolicy::default();
        assert!(!unbounded.is_exhausted(u32::MAX));

        let bounded = PollPolicy::default().with_max_attempts(3);
        assert!(!bounded.is_exhausted(2));
        assert!(bounded.is_exhausted(3));
    }
}
