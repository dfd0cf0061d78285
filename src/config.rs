use std::env;
use std::path::PathBuf;

use crate::date_utils::{DEFAULT_WINDOW_MONTHS, MAX_WINDOW_MONTHS};
use crate::error::{AppError, AppResult};

/// Where transaction listings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// The REST backend at the given base URL.
    Backend(String),
    /// A CSV export on disk.
    Csv(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub source: SourceConfig,
    pub request_timeout_secs: u64,
    pub window_months: usize,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let backend_url = non_empty_var("WALLETLENS_BACKEND_URL");
        let csv_path = non_empty_var("WALLETLENS_CSV_PATH");

        let source = match (backend_url, csv_path) {
            (Some(_), Some(_)) => {
                return Err(AppError::Validation(
                    "Set only one of WALLETLENS_BACKEND_URL and WALLETLENS_CSV_PATH".into(),
                ))
            }
            (Some(url), None) => SourceConfig::Backend(url),
            (None, Some(path)) => SourceConfig::Csv(PathBuf::from(path)),
            (None, None) => {
                return Err(AppError::Validation(
                    "WALLETLENS_BACKEND_URL or WALLETLENS_CSV_PATH must be set".into(),
                ))
            }
        };

        let window_months = env::var("WALLETLENS_WINDOW_MONTHS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_WINDOW_MONTHS)
            .clamp(1, MAX_WINDOW_MONTHS);

        Ok(Self {
            host: env::var("WALLETLENS_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("WALLETLENS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7070),
            source,
            request_timeout_secs: env::var("WALLETLENS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            window_months,
        })
    }

    /// Config for a given source with default server settings.
    pub fn with_source(source: SourceConfig) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            source,
            request_timeout_secs: 30,
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
