//! Implementation of the `hexport serve` command.
//!
//! Responsibility: build the runtime, start the server, wait for the
//! termination request, drain, exit. The drain semantics live in
//! `hexport-server`; this handler only sequences them.

use tracing::{info, instrument, warn};

use hexport_server::{ServeConfig, Server, ShutdownSignal, StopOutcome};

use crate::{
    cli::ServeArgs,
    error::{CliError, CliResult},
};

/// Execute the `hexport serve` command.
///
/// Returns (and therefore exits 0) after the drain sequence finishes,
/// whether or not every in-flight request made it out in time.
#[instrument(skip_all, fields(host = %args.host, port = args.port))]
pub fn execute(args: ServeArgs) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new().map_err(|source| CliError::Io {
        message: "failed to build the tokio runtime".into(),
        source,
    })?;

    runtime.block_on(run(args))
}

/// Startup sequence, then idle until the termination request arrives.
async fn run(args: ServeArgs) -> CliResult<()> {
    // Bind failure propagates out of `start`; nothing is left running.
    let server = Server::start(ServeConfig::new(args.host, args.port)).await?;
    info!(
        addr = %server.local_addr(),
        pid = std::process::id(),
        "server running"
    );

    // Subscribed once for the whole run; triggering twice is harmless.
    ShutdownSignal::from_os_signals().recv().await;
    info!("termination request received");

    match server.stop().await {
        StopOutcome::Drained => info!("server stopped"),
        StopOutcome::TimedOut => warn!("drain timeout elapsed; remaining work was cut off"),
    }

    Ok(())
}
