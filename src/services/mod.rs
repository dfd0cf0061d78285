pub mod aggregation;
pub mod backend_client;
pub mod chart;
pub mod csv_source;

use crate::config::{Config, SourceConfig};
use crate::error::{AppError, AppResult};
use crate::models::{Category, TransactionRecord};

use self::backend_client::BackendClient;
use self::csv_source::CsvSource;

/// Where the chart handlers get their listings from.
#[derive(Debug, Clone)]
pub enum TransactionSource {
    Backend(BackendClient),
    Csv(CsvSource),
}

impl TransactionSource {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        match &config.source {
            SourceConfig::Backend(url) => Ok(Self::Backend(BackendClient::new(
                url,
                config.request_timeout_secs,
            )?)),
            SourceConfig::Csv(path) => Ok(Self::Csv(CsvSource::new(path))),
        }
    }

    pub async fn monthly_totals(&self) -> AppResult<Vec<TransactionRecord>> {
        match self {
            Self::Backend(client) => client.monthly_totals().await,
            Self::Csv(source) => source.transactions().await,
        }
    }

    pub async fn label_totals(&self) -> AppResult<Vec<TransactionRecord>> {
        match self {
            Self::Backend(client) => client.label_totals().await,
            Self::Csv(source) => source.label_totals().await,
        }
    }

    pub async fn category_monthly_totals(
        &self,
        category_id: i64,
    ) -> AppResult<Vec<TransactionRecord>> {
        match self {
            Self::Backend(client) => client.category_monthly_totals(category_id).await,
            Self::Csv(source) => source.category_monthly_totals(category_id).await,
        }
    }

    pub async fn transactions(&self) -> AppResult<Vec<TransactionRecord>> {
        match self {
            Self::Backend(client) => client.transactions().await,
            Self::Csv(source) => source.transactions().await,
        }
    }

    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        match self {
            Self::Backend(client) => client.categories().await,
            Self::Csv(source) => source.categories().await,
        }
    }
}

/// Replace a failed fetch with an empty listing so charts render as zeros.
///
/// Caller errors (`NotFound`, `Validation`) are passed through unchanged.
pub fn or_empty<T>(result: AppResult<Vec<T>>, what: &str) -> AppResult<Vec<T>> {
    match result {
        Ok(items) => Ok(items),
        Err(e @ (AppError::NotFound(_) | AppError::Validation(_))) => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch {}, using empty list", what);
            Ok(Vec::new())
        }
    }
}
