use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::date_utils::month_key;
use crate::models::{TransactionRecord, TransactionType};

/// One named value sequence, aligned with [`SeriesDataset::labels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart-ready output: bucket labels plus one series per transaction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDataset {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl SeriesDataset {
    pub fn series_for(&self, transaction_type: TransactionType) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.name == transaction_type.as_str())
    }
}

/// Per-bucket totals in cents, indexed by [`TransactionType::index`].
///
/// Totals saturate at the `i128` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, Default)]
struct TypeTotals([i128; 2]);

impl TypeTotals {
    fn add(&mut self, transaction_type: TransactionType, cents: i128) {
        let slot = &mut self.0[transaction_type.index()];
        *slot = slot.saturating_add(cents);
    }

    fn get(&self, transaction_type: TransactionType) -> i128 {
        self.0[transaction_type.index()]
    }
}

/// Sum income and expense per month over `month_labels`.
///
/// A transaction's bucket is its date truncated to `YYYY-MM`. Transactions
/// outside the labels, or with a date too short to carry a month, are ignored.
pub fn aggregate_by_month(
    transactions: &[TransactionRecord],
    month_labels: &[String],
) -> SeriesDataset {
    bucket_and_fill(transactions, month_labels, |t| month_key(&t.date))
}

/// Sum income and expense per category over `category_labels`.
///
/// Transactions without a category, or whose category is not listed, are
/// ignored.
pub fn aggregate_by_category(
    transactions: &[TransactionRecord],
    category_labels: &[String],
) -> SeriesDataset {
    bucket_and_fill(transactions, category_labels, |t| {
        t.category_label.as_deref()
    })
}

fn bucket_and_fill<'a, F>(
    transactions: &'a [TransactionRecord],
    labels: &[String],
    bucket_of: F,
) -> SeriesDataset
where
    F: Fn(&'a TransactionRecord) -> Option<&'a str>,
{
    let mut buckets: HashMap<&str, TypeTotals> = labels
        .iter()
        .map(|label| (label.as_str(), TypeTotals::default()))
        .collect();

    let mut dropped = 0usize;
    for transaction in transactions {
        match bucket_of(transaction).and_then(|key| buckets.get_mut(key)) {
            Some(totals) => totals.add(transaction.transaction_type, transaction.amount_cents()),
            None => dropped += 1,
        }
    }

    tracing::trace!(
        transaction_count = transactions.len(),
        bucket_count = labels.len(),
        dropped,
        "Aggregated transactions"
    );

    let series = TransactionType::ALL
        .iter()
        .map(|transaction_type| Series {
            name: transaction_type.as_str().to_string(),
            values: labels
                .iter()
                .map(|label| {
                    let cents = buckets
                        .get(label.as_str())
                        .map(|totals| totals.get(*transaction_type))
                        .unwrap_or(0);
                    cents_to_amount(cents)
                })
                .collect(),
        })
        .collect();

    SeriesDataset {
        labels: labels.to_vec(),
        series,
    }
}

fn cents_to_amount(cents: i128) -> f64 {
    cents as f64 / 100.0
}
