use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Category, TransactionRecord, TransactionType};

/// Transaction listings read from a CSV export.
///
/// Expected columns: `date`, `transaction_type` (1 or 2), and optionally
/// `total` and `label_name`. The file is re-read on every call.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn transactions(&self) -> AppResult<Vec<TransactionRecord>> {
        let content = tokio::fs::read(&self.path).await?;
        parse_csv(&content)
    }

    pub async fn label_totals(&self) -> AppResult<Vec<TransactionRecord>> {
        let records = self.transactions().await?;
        Ok(records
            .into_iter()
            .filter(|r| r.category_label.is_some())
            .collect())
    }

    pub async fn category_monthly_totals(
        &self,
        category_id: i64,
    ) -> AppResult<Vec<TransactionRecord>> {
        let records = self.transactions().await?;
        let categories = categories_of(&records);
        let category = categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        Ok(records
            .into_iter()
            .filter(|r| r.category_label.as_deref() == Some(category.label_name.as_str()))
            .collect())
    }

    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        let records = self.transactions().await?;
        Ok(categories_of(&records))
    }
}

/// Distinct labels in order of first appearance, numbered from 1.
fn categories_of(records: &[TransactionRecord]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for label in records.iter().filter_map(|r| r.category_label.as_deref()) {
        if !categories.iter().any(|c| c.label_name == label) {
            categories.push(Category {
                id: categories.len() as i64 + 1,
                label_name: label.to_string(),
            });
        }
    }
    categories
}

pub fn parse_csv(content: &[u8]) -> AppResult<Vec<TransactionRecord>> {
    trace!(content_size = content.len(), "Starting CSV parsing");

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(|e| AppError::CsvParse(e.to_string()))?
        .clone();

    let date_col = find_column(&headers, "date")
        .ok_or_else(|| AppError::CsvParse("No date column found in CSV".into()))?;
    let type_col = find_column(&headers, "transaction_type")
        .ok_or_else(|| AppError::CsvParse("No transaction_type column found in CSV".into()))?;
    let total_col = find_column(&headers, "total");
    let label_col = find_column(&headers, "label_name");

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, result) in reader.records().enumerate() {
        let row_number = row_idx + 2;

        let row = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row_number, error = %e, "Skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let transaction_type = row
            .get(type_col)
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(TransactionType::from_tag);
        let Some(transaction_type) = transaction_type else {
            debug!(row_number, "Skipping CSV row with unknown transaction type");
            skipped += 1;
            continue;
        };

        records.push(TransactionRecord {
            date: row.get(date_col).unwrap_or("").to_string(),
            transaction_type,
            amount: get_optional_field(&row, total_col).and_then(|s| s.parse::<f64>().ok()),
            category_label: get_optional_field(&row, label_col),
        });
    }

    debug!(
        row_count = records.len(),
        skipped, "CSV parsing completed"
    );

    Ok(records)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn get_optional_field(record: &csv::StringRecord, col: Option<usize>) -> Option<String> {
    col.and_then(|c| record.get(c))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
