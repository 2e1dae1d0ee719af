//! HTTP command

use anyhow::{Context, Result};
use clap::Args;
use std::time::Duration;
use waitfor_core::Probe;
use waitfor_probes::HttpProbe;

/// Arguments for `waitfor http`
#[derive(Args, Debug, Clone)]
pub struct HttpArgs {
    /// Health endpoint URLs, waited for in order
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Bound on a single request, in milliseconds
    #[arg(
        long,
        env = "WAITFOR_CONNECT_TIMEOUT_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,
}

pub fn build_probes(args: &HttpArgs) -> Result<Vec<Box<dyn Probe>>> {
    let timeout = Duration::from_millis(args.timeout_ms);

    args.urls
        .iter()
        .map(|url| {
            let probe = HttpProbe::with_timeout(url, timeout)
                .with_context(|| format!("Cannot wait for '{}'", url))?;
            Ok(Box::new(probe) as Box<dyn Probe>)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct HttpCli {
        #[command(flatten)]
        args: HttpArgs,
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result =
            HttpCli::try_parse_from(["http", "http://api:8000/health", "--timeout-ms", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_builds_probes_in_order() {
        let args = HttpArgs {
            urls: vec![
                "http://api:8000/health".to_string(),
                "https://auth.internal/ready".to_string(),
            ],
            timeout_ms: 1000,
        };

        let probes = build_probes(&args).unwrap();

        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0].target(), "http endpoint 'http://api:8000/health'");
        assert_eq!(probes[1].target(), "http endpoint 'https://auth.internal/ready'");
    }

    #[test]
    fn test_invalid_url_fails_before_polling() {
        let args = HttpArgs {
            urls: vec!["http://api:8000/health".to_string(), "api/health".to_string()],
            timeout_ms: 1000,
        };

        assert!(build_probes(&args).is_err());
    }
}
