//! Database command
//!
//! Waits for the PostgreSQL connection named `default`. Connection settings
//! come from `DATABASE_URL`, or from the `DB_HOST`/`DB_PORT`/`DB_NAME`/
//! `DB_USER`/`DB_PASS` variables the web application itself reads.

use anyhow::{Context, Result};
use clap::Args;
use sqlx::postgres::PgConnectOptions;
use std::time::Duration;
use waitfor_core::Probe;
use waitfor_probes::PostgresProbe;

/// Arguments for `waitfor db`
#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// Connection URL, takes precedence over the individual settings
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Name of the logical connection shown in status lines
    #[arg(long, default_value = "default")]
    pub alias: String,

    /// Database host
    #[arg(long, env = "DB_HOST")]
    pub host: Option<String>,

    /// Database port
    #[arg(long, env = "DB_PORT")]
    pub port: Option<u16>,

    /// Database name
    #[arg(long = "db-name", env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASS", hide_env_values = true)]
    pub password: Option<String>,

    /// Bound on a single connection attempt, in milliseconds
    #[arg(
        long,
        env = "WAITFOR_CONNECT_TIMEOUT_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_ms: u64,
}

/// Builds the database probe from URL or individual settings
pub fn build_probes(args: &DbArgs) -> Result<Vec<Box<dyn Probe>>> {
    let probe = build_probe(args)?;
    Ok(vec![Box::new(probe)])
}

fn build_probe(args: &DbArgs) -> Result<PostgresProbe> {
    let probe = match &args.database_url {
        Some(url) => PostgresProbe::from_url(&args.alias, url)
            .with_context(|| format!("Invalid connection settings for '{}'", args.alias))?,
        None => PostgresProbe::new(&args.alias, connect_options(args)),
    };

    Ok(probe.with_connect_timeout(Duration::from_millis(args.connect_timeout_ms)))
}

/// Applies the individual settings over libpq defaults (`PGHOST`, `PGPORT`, ...)
fn connect_options(args: &DbArgs) -> PgConnectOptions {
    let mut options = PgConnectOptions::new();

    if let Some(host) = &args.host {
        options = options.host(host);
    }
    if let Some(port) = args.port {
        options = options.port(port);
    }
    if let Some(db_name) = &args.db_name {
        options = options.database(db_name);
    }
    if let Some(user) = &args.user {
        options = options.username(user);
    }
    if let Some(password) = &args.password {
        options = options.password(password);
    }

    options
}
