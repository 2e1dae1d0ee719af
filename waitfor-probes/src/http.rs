//! HTTP health endpoint probe

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::debug;
use waitfor_core::{Probe, ProbeOutcome};

use crate::DEFAULT_CONNECT_TIMEOUT;
use crate::error::{ProbeBuildError, Result};

/// Checks that a URL answers `GET` with a 2xx status
#[derive(Debug, Clone)]
pub struct HttpProbe {
    url: Url,
    target: String,
    client: Client,
}

impl HttpProbe {
    /// Create a probe whose requests time out after [`DEFAULT_CONNECT_TIMEOUT`]
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a probe whose requests time out after `timeout`
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(url, client)
    }

    /// Create a probe with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(url: &str, client: Client) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|e| ProbeBuildError::invalid_url(url, e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProbeBuildError::invalid_url(
                url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            target: format!("http endpoint '{}'", parsed),
            url: parsed,
            client,
        })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    fn target(&self) -> &str {
        &self.target
    }

    async fn check(&self) -> ProbeOutcome {
        match self.client.get(self.url.clone()).send().await {
            Ok(response) => classify_status(response.status()),
            Err(e) if e.is_builder() => ProbeOutcome::fatal(e.to_string()),
            Err(e) => {
                debug!("Health request error: {:?}", e);
                ProbeOutcome::transient(e.to_string())
            }
        }
    }
}

/// 2xx is ready, 5xx/408/429 are transient, anything else is fatal
fn classify_status(status: StatusCode) -> ProbeOutcome {
    if status.is_success() {
        ProbeOutcome::Ready
    } else if status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
    {
        ProbeOutcome::transient(format!("HTTP {}", status))
    } else {
        ProbeOutcome::fatal(format!("HTTP {}", status))
    }
}
