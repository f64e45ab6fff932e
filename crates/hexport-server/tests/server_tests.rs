//! Integration tests for the graceful-shutdown server.
//!
//! These run against real sockets on port 0. Work and drain durations are
//! shortened so the suite stays fast; the semantics under test are the
//! same as with the 10-second demonstration values.

use std::time::{Duration, Instant};

use hexport_server::{ServeConfig, Server, ServerError, StopOutcome, WORK_RESPONSE};

fn quick_config(work: Duration, drain: Duration) -> ServeConfig {
    ServeConfig::new("127.0.0.1", 0)
        .with_work_duration(work)
        .with_drain_timeout(drain)
}

fn work_url(server: &Server) -> String {
    format!("http://{}/work", server.local_addr())
}

#[tokio::test]
async fn work_endpoint_returns_the_fixed_body_after_the_delay() {
    let server = Server::start(quick_config(
        Duration::from_millis(100),
        Duration::from_secs(5),
    ))
    .await
    .expect("server should start");

    let started = Instant::now();
    let response = reqwest::get(work_url(&server)).await.expect("request");

    assert_eq!(response.status(), 200);
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(response.text().await.expect("body"), WORK_RESPONSE);

    server.stop().await;
}

#[tokio::test]
async fn concurrent_requests_advance_together() {
    let server = Server::start(quick_config(
        Duration::from_millis(400),
        Duration::from_secs(5),
    ))
    .await
    .expect("server should start");

    let url = work_url(&server);
    let started = Instant::now();
    let (first, second) = tokio::join!(reqwest::get(url.clone()), reqwest::get(url.clone()));

    assert_eq!(first.expect("first request").status(), 200);
    assert_eq!(second.expect("second request").status(), 200);
    // Sequential handling would need at least 800ms.
    assert!(started.elapsed() < Duration::from_millis(750));

    server.stop().await;
}

#[tokio::test]
async fn binding_an_occupied_port_fails() {
    let server = Server::start(quick_config(
        Duration::from_millis(50),
        Duration::from_secs(5),
    ))
    .await
    .expect("first server should start");
    let port = server.local_addr().port();

    let err = Server::start(ServeConfig::new("127.0.0.1", port))
        .await
        .expect_err("second bind must fail");
    assert!(matches!(err, ServerError::Bind { .. }));

    server.stop().await;
}

#[tokio::test]
async fn stop_with_no_in_flight_work_is_immediate() {
    let server = Server::start(quick_config(
        Duration::from_millis(50),
        Duration::from_secs(10),
    ))
    .await
    .expect("server should start");
    let addr = server.local_addr();

    let started = Instant::now();
    assert_eq!(server.stop().await, StopOutcome::Drained);
    // Far below the 10s drain window.
    assert!(started.elapsed() < Duration::from_secs(2));

    // The listener is gone; new connections are refused.
    assert!(reqwest::get(format!("http://{addr}/work")).await.is_err());
}

#[tokio::test]
async fn stop_waits_for_an_in_flight_request() {
    let server = Server::start(quick_config(
        Duration::from_millis(300),
        Duration::from_secs(5),
    ))
    .await
    .expect("server should start");

    let url = work_url(&server);
    let request =
        tokio::spawn(async move { reqwest::get(url).await.expect("request").text().await });

    // Let the request reach the handler before draining.
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(server.stop().await, StopOutcome::Drained);
    let body = request.await.expect("request task").expect("body");
    assert_eq!(body, WORK_RESPONSE);
}

#[tokio::test]
async fn stop_gives_up_at_the_drain_timeout() {
    let server = Server::start(quick_config(
        Duration::from_secs(30),
        Duration::from_millis(200),
    ))
    .await
    .expect("server should start");

    let url = work_url(&server);
    let request = tokio::spawn(async move { reqwest::get(url).await });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = Instant::now();
    assert_eq!(server.stop().await, StopOutcome::TimedOut);
    // Bounded by the timeout, not by the 30s handler.
    assert!(started.elapsed() < Duration::from_secs(5));

    request.abort();
}
