//! Configuration module
//!
//! Turns global CLI options into a validated poll policy and the poller
//! every command shares.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::sync::Arc;
use std::time::Duration;
use waitfor_core::{ConsoleReporter, PollPolicy, ReadinessPoller, Reporter, TracingReporter};

/// Destination of the waiting / retry / available lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Plain lines on stdout
    Console,
    /// Events through the tracing subscriber (stderr)
    Log,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub policy: PollPolicy,
    pub output: OutputMode,
    pub color: bool,
}

impl Config {
    /// Builds and validates the configuration
    pub fn new(
        interval_ms: u64,
        max_attempts: Option<u32>,
        output: OutputMode,
        color: bool,
    ) -> Result<Self> {
        let policy = PollPolicy {
            interval: Duration::from_millis(interval_ms),
            max_attempts,
        };
        policy.validate().context("Invalid poll settings")?;

        Ok(Self {
            policy,
            output,
            color,
        })
    }

    /// Creates the poller for this configuration
    pub fn poller(&self) -> ReadinessPoller {
        let reporter: Arc<dyn Reporter> = match self.output {
            OutputMode::Console => Arc::new(ConsoleReporter::stdout().with_color(self.color)),
            OutputMode::Log => Arc::new(TracingReporter),
        };
        ReadinessPoller::new(self.policy).with_reporter(reporter)
    }
}
