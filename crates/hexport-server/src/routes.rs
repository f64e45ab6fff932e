//! Route table for the demo server.
//!
//! One route, no parameters, fixed output. The handler suspends
//! cooperatively, so other requests keep advancing while one is asleep.

use std::time::Duration;

use axum::{Router, routing::get};
use tracing::debug;

/// The literal body every `/work` response carries.
///
/// Fixed text, even when the work duration is overridden for tests - the
/// endpoint produces no varying output.
pub const WORK_RESPONSE: &str = "done something for 10 seconds\n";

/// Build the router: `GET /work` and nothing else.
pub fn router(work_duration: Duration) -> Router {
    Router::new().route("/work", get(move || work(work_duration)))
}

/// Sleep for the configured duration, then answer with the fixed body.
async fn work(duration: Duration) -> &'static str {
    debug!(?duration, "handling /work");
    tokio::time::sleep(duration).await;
    WORK_RESPONSE
}
