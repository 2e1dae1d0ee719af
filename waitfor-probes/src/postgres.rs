//! PostgreSQL readiness probe
//!
//! Opens a single connection (no pool), runs `SELECT 1` and closes it.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Error};
use std::io::ErrorKind;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use waitfor_core::{Probe, ProbeOutcome};

use crate::DEFAULT_CONNECT_TIMEOUT;
use crate::error::{ProbeBuildError, Result};

/// Checks that a PostgreSQL server accepts connections and queries
#[derive(Debug, Clone)]
pub struct PostgresProbe {
    target: String,
    options: PgConnectOptions,
    connect_timeout: Duration,
}

impl PostgresProbe {
    /// Create a probe for the connection named `alias`
    pub fn new(alias: &str, options: PgConnectOptions) -> Self {
        Self {
            target: format!("database '{}'", alias),
            options,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Create a probe from a `postgres://` URL
    pub fn from_url(alias: &str, url: &str) -> Result<Self> {
        let options =
            PgConnectOptions::from_str(url).map_err(ProbeBuildError::InvalidDatabaseUrl)?;
        Ok(Self::new(alias, options))
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn options(&self) -> &PgConnectOptions {
        &self.options
    }

    async fn ping(&self) -> std::result::Result<(), Error> {
        let mut conn = PgConnection::connect_with(&self.options).await?;
        sqlx::query("SELECT 1").execute(&mut conn).await?;
        conn.close().await
    }
}

#[async_trait]
impl Probe for PostgresProbe {
    fn target(&self) -> &str {
        &self.target
    }

    async fn check(&self) -> ProbeOutcome {
        match tokio::time::timeout(self.connect_timeout, self.ping()).await {
            Ok(Ok(())) => ProbeOutcome::Ready,
            Ok(Err(e)) => {
                debug!("Database probe error: {:?}", e);
                classify_error(&e)
            }
            Err(_) => ProbeOutcome::transient(format!(
                "no response within {:?}",
                self.connect_timeout
            )),
        }
    }
}

/// Maps a driver error onto a probe outcome
///
/// Socket-level failures and the server's "starting up" / "too many
/// connections" states are transient. Authentication, missing databases and
/// configuration mistakes are fatal.
pub fn classify_error(err: &Error) -> ProbeOutcome {
    match err {
        Error::Io(io) => match io.kind() {
            ErrorKind::PermissionDenied
            | ErrorKind::InvalidInput
            | ErrorKind::InvalidData
            | ErrorKind::Unsupported => ProbeOutcome::fatal(err.to_string()),
            _ => ProbeOutcome::transient(io.to_string()),
        },
        Error::PoolTimedOut => ProbeOutcome::transient(err.to_string()),
        Error::Database(db) => match db.code() {
            Some(code) if is_transient_sqlstate(&code) => {
                ProbeOutcome::transient(db.message().to_string())
            }
            _ => ProbeOutcome::fatal(err.to_string()),
        },
        _ => ProbeOutcome::fatal(err.to_string()),
    }
}

/// Returns true for SQLSTATE codes that indicate the server is not ready yet
///
/// - class `08`: connection exception
/// - `57P03`: cannot connect now (startup, recovery)
/// - `53300`: too many connections
pub fn is_transient_sqlstate(code: &str) -> bool {
    code.starts_with("08") || code == "57P03" || code == "53300"
}
