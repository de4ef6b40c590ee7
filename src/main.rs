//! Gatepass station - binary entry point
//!
//! Serves the station tools over stdio. Logs go to stderr.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gatepass::protocol::ServerInfo;
use gatepass::tools::register_all_tools;
use gatepass::{Gate, GateConfig, GateResult, ScanStation, StationServer};

fn main() -> GateResult<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = GateConfig::from_env();
    info!(data_dir = %config.data_dir.display(), "Starting gatepass station");

    let gate = Arc::new(Gate::open(config));
    let station = Arc::new(ScanStation::new(gate));

    let mut server = StationServer::stdio(ServerInfo::default());
    register_all_tools(&mut server, station);
    info!(tools = server.tool_count(), "Station ready");

    server.run()
}
