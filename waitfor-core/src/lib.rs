//! Waitfor Core
//!
//! Readiness polling for startup ordering.
//!
//! This crate contains:
//! - Probe: the readiness check abstraction and its typed outcome
//! - Policy: retry interval and optional attempt limit
//! - Poller: the fixed-interval wait loop
//! - Report: status line output for the three poll events
//!
//! Concrete probes (databases, sockets, HTTP endpoints) live in `waitfor-probes`.

pub mod error;
pub mod policy;
pub mod poller;
pub mod probe;
pub mod report;
pub mod sleeper;

pub use error::{PolicyError, WaitError};
pub use policy::PollPolicy;
pub use poller::{PollAttempt, PollSummary, ReadinessPoller, wait_until_ready};
pub use probe::{Probe, ProbeOutcome};
pub use report::{ConsoleReporter, Reporter, TracingReporter};
pub use sleeper::{Sleeper, TokioSleeper};
