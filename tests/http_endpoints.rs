// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::http::{Request, StatusCode};
use devops_toolchain::{
    AppState, Config, GREETING, MetricsRegistry, create_router, greeter_router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn make_state() -> Arc<AppState> {
    let config = Config {
        server_addr: "127.0.0.1:3001".to_string(),
        update_interval_secs: 10,
    };
    let metrics = MetricsRegistry::new();
    Arc::new(AppState { config, metrics })
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

/// Value of the `random_metric` sample line, if any
fn random_metric_value(body: &str) -> Option<f64> {
    body.lines()
        .filter_map(|line| line.strip_prefix("random_metric "))
        .find_map(|value| value.trim().parse().ok())
}

// --- / endpoint ---

#[tokio::test]
async fn greeter_root_returns_greeting() {
    for _ in 0..3 {
        let resp = greeter_router()
            .oneshot(Request::get("/").body(String::new()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "DevOps Toolchain Application");
    }
}

#[tokio::test]
async fn metrics_service_root_returns_greeting() {
    let app = create_router(make_state());

    let resp = app
        .oneshot(Request::get("/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, GREETING);
}

// --- /metrics endpoint ---

#[tokio::test]
async fn metrics_returns_200_with_openmetrics_content_type() {
    let app = create_router(make_state());

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        ct.contains("openmetrics-text"),
        "Expected OpenMetrics content-type, got: {ct}"
    );
}

#[tokio::test]
async fn metrics_contains_random_metric_in_range() {
    let state = make_state();
    state
        .metrics
        .set_random_metric(devops_toolchain::updater::sample_value());
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    let body = body_string(resp).await;

    let help = body.lines().find(|l| l.starts_with("# HELP")).unwrap();
    assert_eq!(help, "# HELP random_metric A random metric for testing");
    assert!(body.lines().any(|line| line == "# TYPE random_metric gauge"));
    let value = random_metric_value(&body).expect("random_metric sample line");
    assert!((0.0..100.0).contains(&value), "out of range: {value}");
}

#[tokio::test]
async fn metrics_reflects_latest_gauge_value() {
    let state = make_state();
    state.metrics.set_random_metric(73.25);

    let resp = create_router(state.clone())
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(random_metric_value(&body_string(resp).await), Some(73.25));

    state.metrics.set_random_metric(4.5);

    let resp = create_router(state)
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(random_metric_value(&body_string(resp).await), Some(4.5));
}

#[tokio::test(start_paused = true)]
async fn metrics_changes_after_update_interval() {
    let state = make_state();
    state.metrics.set_random_metric(-1.0);
    let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let _updater = devops_toolchain::start_gauge_updater(
        shutdown_rx,
        state.metrics.clone(),
        std::time::Duration::from_secs(state.config.update_interval_secs),
    );
    tokio::time::sleep(std::time::Duration::from_millis(10_001)).await;

    let resp = create_router(state)
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();
    let value = random_metric_value(&body_string(resp).await).unwrap();
    assert!((0.0..100.0).contains(&value), "updater did not run: {value}");
}

// --- 404 for unknown routes ---

#[tokio::test]
async fn greeter_has_no_metrics_route() {
    let resp = greeter_router()
        .oneshot(Request::get("/metrics").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = create_router(make_state());

    let resp = app
        .oneshot(Request::get("/unknown").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- live listener ---

#[tokio::test]
async fn served_over_tcp_until_shutdown() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let config = Config {
        server_addr: "127.0.0.1:0".to_string(),
        update_interval_secs: 10,
    };
    let listener = devops_toolchain::server::bind(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let server = tokio::spawn(devops_toolchain::server::serve(
        listener,
        greeter_router(),
        shutdown_rx,
    ));

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"));
    assert!(raw.ends_with(GREETING));

    shutdown_tx.send(true).unwrap();
    server.await.unwrap().unwrap();
}
