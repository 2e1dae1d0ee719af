//! Status reporting
//!
//! The poller emits three kinds of events: a waiting notice before the first
//! attempt, a warning for every transient failure, and a success notice.
//! Reporters decide where those lines go.

use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{info, warn};

use crate::poller::{PollAttempt, PollSummary};

/// Receives the poller's status events
pub trait Reporter: Send + Sync {
    /// Called once before the first attempt
    fn waiting(&self, target: &str);

    /// Called after each transient failure, before sleeping
    fn retrying(&self, target: &str, attempt: &PollAttempt, reason: &str, interval: Duration);

    /// Called once after a successful attempt
    fn ready(&self, target: &str, summary: &PollSummary);
}

/// Writes human readable status lines, yellow for retries and green for success
pub struct ConsoleReporter<W = io::Stdout> {
    out: Mutex<W>,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Creates a reporter writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            color: true,
        }
    }

    /// Enables or disables terminal colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!("Failed to write status line: {}", e);
        }
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn waiting(&self, target: &str) {
        self.write_line(&format!("Waiting for {}...", target));
    }

    fn retrying(&self, target: &str, _attempt: &PollAttempt, reason: &str, interval: Duration) {
        let line = format!(
            "{} unavailable, waiting {}... ({})",
            target,
            describe_interval(interval),
            reason
        );
        if self.color {
            self.write_line(&line.yellow().to_string());
        } else {
            self.write_line(&line);
        }
    }

    fn ready(&self, target: &str, _summary: &PollSummary) {
        let line = format!("{} available!", target);
        if self.color {
            self.write_line(&line.green().to_string());
        } else {
            self.write_line(&line);
        }
    }
}

/// Routes status events through `tracing` instead of stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn waiting(&self, target: &str) {
        info!("Waiting for {}", target);
    }

    fn retrying(&self, target: &str, attempt: &PollAttempt, reason: &str, interval: Duration) {
        warn!(
            attempt = attempt.number,
            started_at = %attempt.started_at,
            "{} unavailable ({}), retrying in {:?}", target, reason, interval
        );
    }

    fn ready(&self, target: &str, summary: &PollSummary) {
        info!(
            attempts = summary.attempts,
            "{} available after {:?}", target, summary.elapsed
        );
    }
}

/// Formats an interval the way the status lines print it
fn describe_interval(interval: Duration) -> String {
    if interval.subsec_nanos() == 0 {
        match interval.as_secs() {
            1 => "1 second".to_string(),
            secs => format!("{} seconds", secs),
        }
    } else {
        format!("{} ms", interval.as_millis())
    }
}
