//! In-process API tests: requests go through the router with `oneshot`,
//! no socket is opened.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use carhealth_core::{
    CarMonitor, HistoryBuffer, Reading, ReadingSource, TelemetryError, TelemetryGenerator,
};
use carhealth_server::{ServerConfig, build_router};

/// A source that always fails.
struct DeadSensor;

impl ReadingSource for DeadSensor {
    fn name(&self) -> &str {
        "dead"
    }
    fn sample(&mut self) -> Result<Reading, TelemetryError> {
        Err(TelemetryError::SourceUnavailable {
            name: "dead".to_string(),
            reason: "bus timeout".to_string(),
        })
    }
}

fn seeded_app(seed: u64) -> Router {
    let monitor = CarMonitor::new(
        Box::new(TelemetryGenerator::seeded(seed)),
        HistoryBuffer::new(),
    );
    build_router(monitor, &ServerConfig::default())
}

fn failing_app(strict_errors: bool) -> Router {
    let monitor = CarMonitor::new(Box::new(DeadSensor), HistoryBuffer::new());
    let config = ServerConfig {
        strict_errors,
        ..ServerConfig::default()
    };
    build_router(monitor, &config)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn assert_reading_in_bounds(value: &Value) {
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 7, "unexpected fields: {value}");

    let int = |key: &str| value[key].as_u64().unwrap();
    assert!(int("speed") <= 120);
    assert!(int("fuel") <= 100);
    assert!((70..=120).contains(&int("engineTemp")));
    assert!((600..=4000).contains(&int("rpm")));

    for tire in ["frontLeft", "frontRight", "rearLeft", "rearRight"] {
        let p = value["tirePressure"][tire].as_f64().unwrap();
        assert!((30.0..=36.0).contains(&p), "{tire} = {p}");
    }
    let volts = value["batteryVoltage"].as_f64().unwrap();
    assert!((11.8..=14.2).contains(&volts), "batteryVoltage = {volts}");
    assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_banner() {
    let app = seeded_app(1);
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "message": "Car Health Monitoring API" })
    );
}

#[tokio::test]
async fn status_returns_reading_in_bounds() {
    let app = seeded_app(2);
    for _ in 0..25 {
        let (status, body) = get_json(&app, "/car/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_reading_in_bounds(&body);
    }
}

#[tokio::test]
async fn status_and_history_end_to_end() {
    let app = seeded_app(3);

    let (status, history) = get_json(&app, "/car/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, serde_json::json!([]));

    let (_, first) = get_json(&app, "/car/status").await;
    assert_reading_in_bounds(&first);

    let (_, history) = get_json(&app, "/car/history").await;
    assert_eq!(history, Value::Array(vec![first.clone()]));

    let mut readings = vec![first];
    for _ in 1..12 {
        let (_, reading) = get_json(&app, "/car/status").await;
        readings.push(reading);
    }

    let (_, history) = get_json(&app, "/car/history").await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(history.as_slice(), &readings[2..12]);
}

#[tokio::test]
async fn history_reads_are_idempotent() {
    let app = seeded_app(4);
    for _ in 0..3 {
        get_json(&app, "/car/status").await;
    }
    let (_, a) = get_json(&app, "/car/history").await;
    let (_, b) = get_json(&app, "/car/history").await;
    assert_eq!(a, b);
    let parsed: Vec<Reading> = serde_json::from_value(a).unwrap();
    assert_eq!(parsed.len(), 3);
}

#[tokio::test]
async fn health_reports_history_fill() {
    let app = seeded_app(5);
    get_json(&app, "/car/status").await;
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["source"], "simulated");
    assert_eq!(body["history_len"], 1);
    assert_eq!(body["history_capacity"], 10);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = seeded_app(6);
    let request = Request::builder()
        .uri("/car/unknown")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Error contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failure_is_reported_in_body_with_200_by_default() {
    let app = failing_app(false);
    let (status, body) = get_json(&app, "/car/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "error": "reading source dead unavailable: bus timeout" })
    );

    let (_, history) = get_json(&app, "/car/history").await;
    assert_eq!(history, serde_json::json!([]));
}

#[tokio::test]
async fn failure_is_500_with_strict_errors() {
    let app = failing_app(true);
    let (status, body) = get_json(&app, "/car/status").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("bus timeout"));
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preflight_allows_any_origin() {
    let app = seeded_app(7);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/car/status")
        .header(header::ORIGIN, "http://dashboard.local:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-client-id")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;
    assert!(status.is_success(), "preflight status {status}");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn cross_origin_get_allows_any_origin() {
    let app = seeded_app(8);
    let request = Request::builder()
        .uri("/car/history")
        .header(header::ORIGIN, "https://example.org")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn default_cors_sends_no_credentials() {
    let app = seeded_app(10);
    let request = Request::builder()
        .uri("/car/status")
        .header(header::ORIGIN, "https://example.org")
        .header(header::COOKIE, "session=abc")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
}

#[tokio::test]
async fn credentials_mode_mirrors_origin() {
    let monitor = CarMonitor::new(Box::new(TelemetryGenerator::seeded(9)), HistoryBuffer::new());
    let config = ServerConfig {
        cors_credentials: true,
        ..ServerConfig::default()
    };
    let app = build_router(monitor, &config);
    let request = Request::builder()
        .uri("/car/status")
        .header(header::ORIGIN, "https://example.org")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://example.org"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_status_requests_keep_history_bounded() {
    let app = seeded_app(10);
    let mut tasks = Vec::new();
    for _ in 0..40 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            get_json(&app, "/car/status").await.1
        }));
    }
    let mut readings = Vec::new();
    for task in tasks {
        readings.push(task.await.unwrap());
    }

    let (_, history) = get_json(&app, "/car/history").await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 10);
    for entry in history {
        assert!(readings.contains(entry));
    }
}
