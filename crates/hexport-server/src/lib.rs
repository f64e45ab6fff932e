//! Minimal HTTP server demonstrating graceful shutdown.
//!
//! Independent of the order-placement demo: this crate exists solely to
//! show a network service draining in-flight requests before exit. It
//! serves exactly one route, `GET /work`, which sleeps for a fixed
//! duration and then answers with a fixed body.
//!
//! Lifecycle:
//!
//! ```text
//! Idle ──start()──▶ Listening ──trigger──▶ Draining ──drain/timeout──▶ Stopped
//!        (bind failure falls back to an error)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hexport_server::{ServeConfig, Server, ShutdownSignal};
//!
//! # async fn run() -> Result<(), hexport_server::ServerError> {
//! let server = Server::start(ServeConfig::default()).await?;
//!
//! // Block until SIGTERM / Ctrl-C, then drain with the configured timeout.
//! ShutdownSignal::from_os_signals().recv().await;
//! server.stop().await;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod routes;
pub mod server;
pub mod shutdown;

// Re-export the public surface
pub use error::{ServerError, ServerResult};
pub use routes::WORK_RESPONSE;
pub use server::{DEFAULT_DRAIN_TIMEOUT, DEFAULT_WORK_DURATION, ServeConfig, Server, StopOutcome};
pub use shutdown::ShutdownSignal;
