//! Readiness poller
//!
//! Invokes a probe until it reports ready. Transient failures are retried
//! after a fixed interval; a fatal failure ends the wait on first occurrence.
//! There is no backoff and, unless the policy sets `max_attempts`, no limit.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::WaitError;
use crate::policy::PollPolicy;
use crate::probe::{Probe, ProbeOutcome};
use crate::report::{ConsoleReporter, Reporter};
use crate::sleeper::{Sleeper, TokioSleeper};

/// One probe invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollAttempt {
    /// 1-based attempt number
    pub number: u32,
    /// When the probe was invoked
    pub started_at: DateTime<Utc>,
}

/// Outcome of a successful wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSummary {
    pub target: String,
    /// Probe invocations, including the successful one
    pub attempts: u32,
    pub elapsed: Duration,
}

/// Waits for dependencies to become ready
///
/// Reporter and sleeper are injected so callers choose where status lines
/// go and tests can observe sleeps without waiting.
#[derive(Clone)]
pub struct ReadinessPoller {
    policy: PollPolicy,
    reporter: Arc<dyn Reporter>,
    sleeper: Arc<dyn Sleeper>,
}

impl ReadinessPoller {
    /// Creates a poller printing to stdout and sleeping on the tokio timer
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            policy,
            reporter: Arc::new(ConsoleReporter::stdout()),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Polls `probe` until it reports ready
    ///
    /// Returns only after a successful check, a fatal outcome, or when the
    /// policy's attempt limit is reached.
    pub async fn wait_until_ready(&self, probe: &dyn Probe) -> Result<PollSummary, WaitError> {
        let target = probe.target();
        let started = Instant::now();
        let mut number = 0;

        self.reporter.waiting(target);

        loop {
            number = next_attempt_number(number);
            let attempt = PollAttempt {
                number,
                started_at: Utc::now(),
            };

            debug!(attempt = number, "Probing {}", target);

            match probe.check().await {
                ProbeOutcome::Ready => {
                    let summary = PollSummary {
                        target: target.to_string(),
                        attempts: number,
                        elapsed: started.elapsed(),
                    };
                    self.reporter.ready(target, &summary);
                    return Ok(summary);
                }
                ProbeOutcome::Transient(reason) => {
                    if self.policy.is_exhausted(number) {
                        debug!("Giving up on {} after {} attempt(s)", target, number);
                        return Err(WaitError::AttemptsExhausted {
                            target: target.to_string(),
                            attempts: number,
                            last_reason: reason,
                        });
                    }

                    self.reporter
                        .retrying(target, &attempt, &reason, self.policy.interval);
                    self.sleeper.sleep(self.policy.interval).await;
                }
                ProbeOutcome::Fatal(reason) => {
                    return Err(WaitError::Fatal {
                        target: target.to_string(),
                        attempt: number,
                        reason,
                    });
                }
            }
        }
    }

    /// Waits for each probe in order, stopping at the first error
    pub async fn wait_until_all_ready(
        &self,
        probes: &[Box<dyn Probe>],
    ) -> Result<Vec<PollSummary>, WaitError> {
        let mut summaries = Vec::with_capacity(probes.len());
        for probe in probes {
            summaries.push(self.wait_until_ready(probe.as_ref()).await?);
        }
        Ok(summaries)
    }
}

/// Attempt counter stops at `u32::MAX` instead of overflowing on endless waits
fn next_attempt_number(number: u32) -> u32 {
    number.saturating_add(1)
}

/// Polls `probe` every `interval` until it reports ready, with no attempt limit
pub async fn wait_until_ready(
    probe: &dyn Probe,
    interval: Duration,
) -> Result<PollSummary, WaitError> {
    ReadinessPoller::new(PollPolicy::new(interval))
        .wait_until_ready(probe)
        .await
}
