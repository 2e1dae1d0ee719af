//! Waitfor CLI
//!
//! Startup barrier for container init sequences: blocks until a dependency
//! (by default the `default` PostgreSQL database) is available, then exits 0.
//! Exits non-zero only when a check fails in a way retrying cannot fix, or
//! when `--max-attempts` runs out.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, OutputMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "waitfor")]
#[command(about = "Wait for a dependency to become available", long_about = None)]
struct Cli {
    /// Delay between attempts, in milliseconds
    #[arg(long, global = true, env = "WAITFOR_INTERVAL_MS", default_value_t = 1000)]
    interval_ms: u64,

    /// Give up after this many attempts (retries forever when unset)
    #[arg(long, global = true, env = "WAITFOR_MAX_ATTEMPTS")]
    max_attempts: Option<u32>,

    /// Where status lines go
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Console)]
    output: OutputMode,

    /// Disable colored status lines
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the status lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waitfor=info,waitfor_core=info,waitfor_probes=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(
        cli.interval_ms,
        cli.max_attempts,
        cli.output,
        !cli.no_color,
    )?;

    handle_command(cli.command, &config).await
}
