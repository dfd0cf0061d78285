use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{
    records_from_rows, Category, LabelTotalRow, MonthlyTotalRow, TransactionRecord,
    TransactionRow,
};

const MONTHLY_PATH: &str = "/analytics/monthly";
const LABEL_PATH: &str = "/analytics/label";
const REPORT_PATH: &str = "/analytics/report";
const CATEGORIES_PATH: &str = "/transaction_label/";

/// Client for the finance REST backend's listing endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-month income/expense totals across all categories.
    pub async fn monthly_totals(&self) -> AppResult<Vec<TransactionRecord>> {
        let rows: Vec<MonthlyTotalRow> = self.get_json(MONTHLY_PATH).await?;
        Ok(records_from_rows(rows))
    }

    /// Per-category income/expense totals.
    pub async fn label_totals(&self) -> AppResult<Vec<TransactionRecord>> {
        let rows: Vec<LabelTotalRow> = self.get_json(LABEL_PATH).await?;
        Ok(records_from_rows(rows))
    }

    /// Per-month totals restricted to one category.
    pub async fn category_monthly_totals(
        &self,
        category_id: i64,
    ) -> AppResult<Vec<TransactionRecord>> {
        let path = format!("{}/{}", LABEL_PATH, category_id);
        let rows: Vec<MonthlyTotalRow> = self.get_json(&path).await?;
        Ok(records_from_rows(rows))
    }

    /// The plain transaction listing.
    pub async fn transactions(&self) -> AppResult<Vec<TransactionRecord>> {
        let rows: Vec<TransactionRow> = self.get_json(REPORT_PATH).await?;
        Ok(records_from_rows(rows))
    }

    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.get_json(CATEGORIES_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Fetching from backend");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "{} returned {}: {}",
                path, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to parse {} response: {}", path, e)))
    }
}
