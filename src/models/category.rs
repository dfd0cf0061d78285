use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A transaction label as listed by the backend's `/transaction_label/` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub label_name: String,
}

/// Bucket labels for category-wise aggregation, in listing order.
///
/// A label listed more than once keeps only its first position, so each
/// category's totals appear in exactly one bucket.
pub fn category_labels(categories: &[Category]) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|c| seen.insert(c.label_name.as_str()))
        .map(|c| c.label_name.clone())
        .collect()
}
