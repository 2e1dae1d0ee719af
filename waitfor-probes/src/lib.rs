//! Waitfor Probes
//!
//! Concrete readiness probes for the `waitfor-core` poller:
//! - [`PostgresProbe`]: opens a connection and runs `SELECT 1`
//! - [`TcpProbe`]: checks that a `host:port` accepts connections
//! - [`HttpProbe`]: checks that a health endpoint answers with 2xx
//!
//! Each probe maps its client's errors onto transient or fatal outcomes.
//! Transient means "the dependency is still starting", fatal means the
//! configuration is wrong and waiting longer will not help.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use waitfor_core::wait_until_ready;
//! use waitfor_probes::PostgresProbe;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let probe = PostgresProbe::from_url("default", "postgres://app:app@db:5432/app")?;
//!     wait_until_ready(&probe, Duration::from_secs(1)).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod http;
mod postgres;
mod tcp;

pub use error::{ProbeBuildError, Result};
pub use http::HttpProbe;
pub use postgres::{PostgresProbe, classify_error, is_transient_sqlstate};
pub use tcp::TcpProbe;

use std::time::Duration;

/// Default bound on a single connection attempt
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
