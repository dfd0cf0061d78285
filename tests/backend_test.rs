//! Integration tests for charts fed by the REST backend.

mod common;

use axum::http::StatusCode;
use common::{series_values, spawn_fake_backend, unreachable_backend, TestClient};
use walletlens::models::TransactionType;
use walletlens::services::backend_client::BackendClient;

#[tokio::test]
async fn test_client_decodes_listings() {
    let base_url = spawn_fake_backend().await;
    let client = BackendClient::new(&base_url, 5).unwrap();

    let monthly = client.monthly_totals().await.unwrap();
    assert_eq!(monthly.len(), 5);
    assert_eq!(monthly[1].transaction_type, TransactionType::Expense);
    assert_eq!(monthly[3].amount, None);

    let labels = client.label_totals().await.unwrap();
    assert_eq!(labels[0].category_label.as_deref(), Some("Food"));

    let categories = client.categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].label_name, "Salary");

    let food = client.category_monthly_totals(1).await.unwrap();
    assert_eq!(food.len(), 2);

    let report = client.transactions().await.unwrap();
    assert_eq!(report[0].date, "2024-03-05");
}

#[tokio::test]
async fn test_client_reports_http_errors() {
    let base_url = spawn_fake_backend().await;
    let client = BackendClient::new(&format!("{}/missing", base_url), 5).unwrap();

    assert!(client.monthly_totals().await.is_err());
}

#[tokio::test]
async fn test_monthly_chart_from_backend() {
    let base_url = spawn_fake_backend().await;
    let client = TestClient::with_backend(&base_url);

    let (status, body) = client
        .get_json("/api/charts/monthly?reference_date=2024-04-15&months=2")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["labels"], serde_json::json!(["2024-03", "2024-04"]));
    assert_eq!(series_values(&body, "Income"), vec![100.0, 10.0]);
    assert_eq!(series_values(&body, "Expense"), vec![40.0, 0.0]);
}

#[tokio::test]
async fn test_transactions_chart_from_backend() {
    let base_url = spawn_fake_backend().await;
    let client = TestClient::with_backend(&base_url);

    let (status, body) = client
        .get_json("/api/charts/transactions?reference_date=2024-04-15&months=2")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(series_values(&body, "Income"), vec![100.0, 10.0]);
    assert_eq!(series_values(&body, "Expense"), vec![40.0, 0.0]);
}

/// Labels come from the category list; unlisted categories are dropped.
#[tokio::test]
async fn test_category_chart_from_backend() {
    let base_url = spawn_fake_backend().await;
    let client = TestClient::with_backend(&base_url);

    let (status, body) = client.get_json("/api/charts/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["labels"], serde_json::json!(["Food", "Salary"]));
    assert_eq!(series_values(&body, "Income"), vec![0.0, 2000.0]);
    assert_eq!(series_values(&body, "Expense"), vec![60.5, 0.0]);
}

#[tokio::test]
async fn test_category_monthly_chart_from_backend() {
    let base_url = spawn_fake_backend().await;
    let client = TestClient::with_backend(&base_url);

    let (status, body) = client
        .get_json("/api/charts/categories/1?reference_date=2024-04-15&months=3")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["labels"],
        serde_json::json!(["2024-02", "2024-03", "2024-04"])
    );
    assert_eq!(series_values(&body, "Expense"), vec![25.0, 0.0, 35.5]);
}

/// A backend that cannot be reached yields all-zero charts, not an error.
#[tokio::test]
async fn test_unreachable_backend_yields_zeros() {
    let client = TestClient::with_backend(&unreachable_backend().await);

    let (status, body) = client
        .get_json("/api/charts/monthly?reference_date=2024-04-15&months=4")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(series_values(&body, "Income"), vec![0.0; 4]);
    assert_eq!(series_values(&body, "Expense"), vec![0.0; 4]);

    let (status, body) = client.get_json("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
