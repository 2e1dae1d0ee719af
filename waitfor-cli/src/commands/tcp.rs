//! TCP command

use clap::Args;
use std::time::Duration;
use waitfor_core::Probe;
use waitfor_probes::TcpProbe;

/// Arguments for `waitfor tcp`
#[derive(Args, Debug, Clone)]
pub struct TcpArgs {
    /// Endpoints as HOST:PORT, waited for in order
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Bound on a single connection attempt, in milliseconds
    #[arg(
        long,
        env = "WAITFOR_CONNECT_TIMEOUT_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_ms: u64,
}

pub fn build_probes(args: &TcpArgs) -> Vec<Box<dyn Probe>> {
    let timeout = Duration::from_millis(args.connect_timeout_ms);

    args.addresses
        .iter()
        .map(|address| {
            Box::new(TcpProbe::new(address.as_str()).with_connect_timeout(timeout))
                as Box<dyn Probe>
        })
        .collect()
}
