//! TCP readiness probe

use async_trait::async_trait;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::net::TcpStream;
use waitfor_core::{Probe, ProbeOutcome};

use crate::DEFAULT_CONNECT_TIMEOUT;

/// Checks that `host:port` accepts TCP connections
#[derive(Debug, Clone)]
pub struct TcpProbe {
    address: String,
    target: String,
    connect_timeout: Duration,
}

impl TcpProbe {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            target: format!("tcp endpoint '{}'", address),
            address,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

#[async_trait]
impl Probe for TcpProbe {
    fn target(&self) -> &str {
        &self.target
    }

    async fn check(&self) -> ProbeOutcome {
        if let Err(reason) = validate_address(&self.address) {
            return ProbeOutcome::Fatal(reason);
        }

        let connect = TcpStream::connect(self.address.as_str());
        match tokio::time::timeout(self.connect_timeout, connect).await {
            Ok(Ok(_stream)) => ProbeOutcome::Ready,
            Ok(Err(e)) => match e.kind() {
                ErrorKind::InvalidInput | ErrorKind::PermissionDenied | ErrorKind::Unsupported => {
                    ProbeOutcome::fatal(e.to_string())
                }
                // Refused, reset and unresolved names all clear up once the peer starts
                _ => ProbeOutcome::transient(e.to_string()),
            },
            Err(_) => ProbeOutcome::transient(format!(
                "no response within {:?}",
                self.connect_timeout
            )),
        }
    }
}

/// Checks for a non-empty host and a non-zero port
fn validate_address(address: &str) -> Result<(), String> {
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| format!("'{}' is missing a port", address))?;

    if host.is_empty() {
        return Err(format!("'{}' is missing a host", address));
    }

    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(format!("'{}' has an invalid port", address)),
        Ok(_) => Ok(()),
    }
}
