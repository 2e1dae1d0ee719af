//! Readiness probe abstraction

use async_trait::async_trait;

/// Result of a single readiness check
///
/// Transient and fatal failures are kept apart so the poller's retry
/// decision is a plain match instead of error-type inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The dependency is usable
    Ready,
    /// The dependency is not usable yet, retrying may succeed
    Transient(String),
    /// The check failed in a way retrying will not fix
    Fatal(String),
}

impl ProbeOutcome {
    pub fn transient(reason: impl Into<String>) -> Self {
        Self::Transient(reason.into())
    }

    pub fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal(reason.into())
    }
}

/// A readiness check against one named dependency
#[async_trait]
pub trait Probe: Send + Sync {
    /// Human readable label, e.g. `database 'default'`
    fn target(&self) -> &str;

    /// Performs one check
    async fn check(&self) -> ProbeOutcome;
}
