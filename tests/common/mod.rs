//! Shared test utilities for integration tests.
//!
//! `TestClient` drives the full router with `oneshot` requests. It can be
//! backed by a CSV export written to a temp file, or by a fake REST backend
//! served on an OS-assigned port.

#![allow(dead_code)]

use std::io::Write;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::NamedTempFile;
use tower::ServiceExt;
use walletlens::config::{Config, SourceConfig};
use walletlens::server::{build_app, serve};

/// A test client that sends sequential requests against the application.
pub struct TestClient {
    app: Router,
    // Keeps the CSV export alive for the lifetime of the client.
    _csv: Option<NamedTempFile>,
}

impl TestClient {
    /// Create a client reading transactions from the given CSV content.
    pub fn with_csv(content: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write CSV");

        let config = Config::with_source(SourceConfig::Csv(file.path().to_path_buf()));
        let (_, app) = build_app(config).expect("Failed to build app");

        Self {
            app,
            _csv: Some(file),
        }
    }

    /// Create a client reading transactions from a backend at `base_url`.
    pub fn with_backend(base_url: &str) -> Self {
        let config = Config::with_source(SourceConfig::Backend(base_url.to_string()));
        let (_, app) = build_app(config).expect("Failed to build app");
        Self { app, _csv: None }
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a GET request and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, parsed)
    }
}

/// Extract a series' values from a `{labels, series}` body.
pub fn series_values(body: &Value, name: &str) -> Vec<f64> {
    body["series"]
        .as_array()
        .and_then(|series| series.iter().find(|s| s["name"] == name))
        .and_then(|s| s["values"].as_array())
        .map(|values| values.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

/// Canned backend listings, shaped like the REST backend's responses.
pub fn fake_backend() -> Router {
    Router::new()
        .route(
            "/analytics/monthly",
            get(|| async {
                Json(serde_json::json!([
                    {"formatted_date": "2024-03-01", "transaction_type": 1, "total": 100},
                    {"formatted_date": "2024-03-01", "transaction_type": 2, "total": 40},
                    {"formatted_date": "2024-04-01", "transaction_type": 1, "total": 10},
                    {"formatted_date": "2024-04-01", "transaction_type": 2, "total": null},
                    {"formatted_date": "2022-01-01", "transaction_type": 1, "total": 999}
                ]))
            }),
        )
        .route(
            "/analytics/label",
            get(|| async {
                Json(serde_json::json!([
                    {"label_name": "Food", "transaction_type": 2, "total": 60.5},
                    {"label_name": "Salary", "transaction_type": 1, "total": 2000},
                    {"label_name": "Travel", "transaction_type": 2, "total": 300}
                ]))
            }),
        )
        .route(
            "/analytics/label/:id",
            get(|axum::extract::Path(id): axum::extract::Path<i64>| async move {
                let rows = if id == 1 {
                    serde_json::json!([
                        {"formatted_date": "2024-02-01", "transaction_type": 2, "total": 25},
                        {"formatted_date": "2024-04-01", "transaction_type": 2, "total": 35.5}
                    ])
                } else {
                    serde_json::json!([])
                };
                Json(rows)
            }),
        )
        .route(
            "/analytics/report",
            get(|| async {
                Json(serde_json::json!([
                    {"date": "2024-03-05", "transaction_type": 1, "total": 100},
                    {"date": "2024-03-20", "transaction_type": 2, "total": 40},
                    {"date": "2024-04-01", "transaction_type": 1, "total": 10}
                ]))
            }),
        )
        .route(
            "/transaction_label/",
            get(|| async {
                Json(serde_json::json!([
                    {"id": 1, "label_name": "Food"},
                    {"id": 2, "label_name": "Salary"}
                ]))
            }),
        )
}

/// Serve [`fake_backend`] on an OS-assigned port and return its base URL.
pub async fn spawn_fake_backend() -> String {
    let (port, _handle) = serve(fake_backend(), "127.0.0.1", 0)
        .await
        .expect("Failed to start fake backend");
    format!("http://127.0.0.1:{}", port)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
