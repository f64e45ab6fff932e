//! Server lifecycle: bind, listen, drain, stop.
//!
//! [`Server::start`] only returns once the listener is bound, so a ready
//! result means the server is reachable. [`Server::stop`] consumes the
//! server - a stopped server cannot be restarted.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::{error::ServerError, routes, shutdown::ShutdownSignal};

/// How long `/work` pretends to work.
pub const DEFAULT_WORK_DURATION: Duration = Duration::from_secs(10);

/// How long `stop` waits for in-flight requests before giving up.
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

// ── configuration ─────────────────────────────────────────────────────────────

/// Server configuration.
///
/// Host and port are supplied directly by the caller; there is no
/// environment or file based configuration in this demo. The durations
/// default to the demonstration's fixed 10 seconds and exist as fields so
/// the test suite can exercise drain behavior without waiting that long.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub work_duration: Duration,
    pub drain_timeout: Duration,
}

impl ServeConfig {
    /// Configuration for the given address with the default durations.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            work_duration: DEFAULT_WORK_DURATION,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
        }
    }

    /// Override how long the `/work` handler sleeps.
    pub fn with_work_duration(mut self, duration: Duration) -> Self {
        self.work_duration = duration;
        self
    }

    /// Override how long `stop` waits for in-flight requests.
    pub fn with_drain_timeout(mut self, timeout: Duration) -> Self {
        self.drain_timeout = timeout;
        self
    }
}

impl Default for ServeConfig {
    /// The demonstration address: `0.0.0.0:3000`.
    fn default() -> Self {
        Self::new("0.0.0.0", 3000)
    }
}

// ── lifecycle ─────────────────────────────────────────────────────────────────

/// How a [`Server::stop`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// Every in-flight request completed within the drain timeout.
    Drained,
    /// The timeout elapsed first; remaining work was cut off.
    TimedOut,
}

/// A listening server.
///
/// Holds the serve task and the shutdown signal wired into its graceful
/// shutdown path. Dropping a `Server` without calling [`Server::stop`]
/// detaches the task; the demo binary always stops explicitly.
#[derive(Debug)]
pub struct Server {
    local_addr: SocketAddr,
    shutdown: ShutdownSignal,
    drain_timeout: Duration,
    task: JoinHandle<()>,
}

impl Server {
    /// Bind the listener and start serving.
    ///
    /// Resolves only after the bind has succeeded; a bind failure (port in
    /// use, bad host) surfaces as [`ServerError::Bind`] and nothing is
    /// left running.
    pub async fn start(config: ServeConfig) -> Result<Server, ServerError> {
        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .map_err(|source| ServerError::Bind {
                host: config.host.clone(),
                port: config.port,
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            host: config.host.clone(),
            port: config.port,
            source,
        })?;

        let shutdown = ShutdownSignal::new();
        let app = routes::router(config.work_duration);

        let drain = shutdown.clone();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app)
                .with_graceful_shutdown(async move { drain.recv().await });
            if let Err(e) = serve.await {
                error!(error = %e, "server loop ended with an error");
            }
        });

        info!(addr = %local_addr, "server listening");
        Ok(Server {
            local_addr,
            shutdown,
            drain_timeout: config.drain_timeout,
            task,
        })
    }

    /// The address the listener actually bound (useful with port 0).
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop the server.
    ///
    /// Triggers the shutdown signal - the listener stops accepting new
    /// connections immediately - then races the drain of in-flight
    /// requests against the configured timeout. Whichever finishes first
    /// decides the outcome; on timeout the serve task is aborted.
    pub async fn stop(self) -> StopOutcome {
        self.shutdown.trigger();
        info!("draining in-flight requests");

        let mut task = self.task;
        match tokio::time::timeout(self.drain_timeout, &mut task).await {
            Ok(_) => {
                info!("server stopped");
                StopOutcome::Drained
            }
            Err(_) => {
                task.abort();
                info!(timeout = ?self.drain_timeout, "drain timeout elapsed");
                StopOutcome::TimedOut
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_demonstration_address() {
        let config = ServeConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.work_duration, DEFAULT_WORK_DURATION);
        assert_eq!(config.drain_timeout, DEFAULT_DRAIN_TIMEOUT);
    }

    #[test]
    fn duration_overrides_apply() {
        let config = ServeConfig::new("127.0.0.1", 0)
            .with_work_duration(Duration::from_millis(50))
            .with_drain_timeout(Duration::from_millis(200));
        assert_eq!(config.work_duration, Duration::from_millis(50));
        assert_eq!(config.drain_timeout, Duration::from_millis(200));
    }
}
