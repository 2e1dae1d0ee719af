//! Error types for readiness polling

use std::time::Duration;
use thiserror::Error;

/// Errors that end a wait without the dependency becoming ready
#[derive(Debug, Error)]
pub enum WaitError {
    /// The probe reported a failure that retrying will not fix
    #[error("{target} check failed on attempt {attempt}: {reason}")]
    Fatal {
        /// Probe target label
        target: String,
        /// Attempt on which the failure occurred
        attempt: u32,
        /// Failure description from the probe
        reason: String,
    },

    /// The configured attempt limit was reached while the target was still unavailable
    #[error("{target} still unavailable after {attempts} attempt(s): {last_reason}")]
    AttemptsExhausted {
        /// Probe target label
        target: String,
        /// Number of attempts performed
        attempts: u32,
        /// Reason reported by the last transient failure
        last_reason: String,
    },
}

impl WaitError {
    /// Target label of the probe that caused this error
    pub fn target(&self) -> &str {
        match self {
            Self::Fatal { target, .. } | Self::AttemptsExhausted { target, .. } => target,
        }
    }

    /// Check if this error came from a fatal probe outcome
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }
}

/// Invalid poll policy settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("poll interval must be greater than 0 (got {0:?})")]
    ZeroInterval(Duration),

    #[error("max_attempts must be greater than 0 when set")]
    ZeroMaxAttempts,
}
