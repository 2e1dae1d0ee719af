//! Commands module
//!
//! Defines all CLI commands and their handlers. Every command builds one or
//! more probes and hands them to the shared poller.

mod db;
mod http;
mod tcp;

pub use db::DbArgs;
pub use http::HttpArgs;
pub use tcp::TcpArgs;

use anyhow::Result;
use clap::Subcommand;
use tracing::debug;
use waitfor_core::Probe;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Wait until the PostgreSQL database accepts connections
    #[command(alias = "wait-for-db")]
    Db(DbArgs),
    /// Wait until TCP endpoints accept connections
    Tcp(TcpArgs),
    /// Wait until HTTP health endpoints answer with 2xx
    Http(HttpArgs),
}

/// Handle a CLI command
///
/// Routes the command to the module that builds its probes, then waits for
/// each of them in order.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let probes = match command {
        Commands::Db(args) => db::build_probes(&args)?,
        Commands::Tcp(args) => tcp::build_probes(&args),
        Commands::Http(args) => http::build_probes(&args)?,
    };

    wait_for(probes, config).await
}

async fn wait_for(probes: Vec<Box<dyn Probe>>, config: &Config) -> Result<()> {
    let summaries = config.poller().wait_until_all_ready(&probes).await?;

    for summary in &summaries {
        debug!(
            "{} ready after {} attempt(s) in {:?}",
            summary.target, summary.attempts, summary.elapsed
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputMode;
    use tokio::net::TcpListener;
    use waitfor_core::WaitError;

    fn config() -> Config {
        Config::new(10, Some(5), OutputMode::Log, false).unwrap()
    }

    #[tokio::test]
    async fn test_fatal_target_returns_error() {
        let command = Commands::Tcp(TcpArgs {
            addresses: vec!["db".to_string()],
            connect_timeout_ms: 1000,
        });

        let err = handle_command(command, &config()).await.unwrap_err();

        let wait_err = err.downcast_ref::<WaitError>().unwrap();
        assert!(wait_err.is_fatal());
        assert_eq!(wait_err.target(), "tcp endpoint 'db'");
    }

    #[tokio::test]
    async fn test_ready_targets_return_ok() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let command = Commands::Tcp(TcpArgs {
            addresses: vec![listener.local_addr().unwrap().to_string()],
            connect_timeout_ms: 1000,
        });

        assert!(handle_command(command, &config()).await.is_ok());
    }
}
