use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// Decode the backend's integer tag (1 = income, 2 = expense).
    pub fn from_tag(tag: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    pub fn tag(&self) -> i64 {
        match self {
            TransactionType::Income => 1,
            TransactionType::Expense => 2,
        }
    }

    /// Slot of this type in a per-bucket accumulator.
    pub fn index(&self) -> usize {
        match self {
            TransactionType::Income => 0,
            TransactionType::Expense => 1,
        }
    }
}

/// One financial event as seen by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub transaction_type: TransactionType,
    pub amount: Option<f64>,
    pub category_label: Option<String>,
}

impl TransactionRecord {
    pub fn new(date: impl Into<String>, transaction_type: TransactionType, amount: f64) -> Self {
        Self {
            date: date.into(),
            transaction_type,
            amount: Some(amount),
            category_label: None,
        }
    }

    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.category_label = Some(label.into());
        self
    }

    /// Amount in cents. Missing and non-finite amounts count as zero.
    ///
    /// Magnitudes beyond `i128` saturate at its bounds.
    pub fn amount_cents(&self) -> i128 {
        match self.amount {
            Some(amount) if amount.is_finite() => (amount * 100.0).round() as i128,
            _ => 0,
        }
    }
}

/// Row of the plain transaction listing (`/analytics/report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRow {
    pub date: String,
    pub transaction_type: i64,
    pub total: Option<f64>,
}

/// Row of the month-wise listings (`/analytics/monthly`, `/analytics/label/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotalRow {
    pub formatted_date: String,
    pub transaction_type: i64,
    pub total: Option<f64>,
}

/// Row of the category-wise listing (`/analytics/label`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelTotalRow {
    pub label_name: String,
    pub transaction_type: i64,
    pub total: Option<f64>,
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = i64;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let transaction_type =
            TransactionType::from_tag(row.transaction_type).ok_or(row.transaction_type)?;
        Ok(Self {
            date: row.date,
            transaction_type,
            amount: row.total,
            category_label: None,
        })
    }
}

impl TryFrom<MonthlyTotalRow> for TransactionRecord {
    type Error = i64;

    fn try_from(row: MonthlyTotalRow) -> Result<Self, Self::Error> {
        let transaction_type =
            TransactionType::from_tag(row.transaction_type).ok_or(row.transaction_type)?;
        Ok(Self {
            date: row.formatted_date,
            transaction_type,
            amount: row.total,
            category_label: None,
        })
    }
}

impl TryFrom<LabelTotalRow> for TransactionRecord {
    type Error = i64;

    fn try_from(row: LabelTotalRow) -> Result<Self, Self::Error> {
        let transaction_type =
            TransactionType::from_tag(row.transaction_type).ok_or(row.transaction_type)?;
        Ok(Self {
            date: String::new(),
            transaction_type,
            amount: row.total,
            category_label: Some(row.label_name),
        })
    }
}

/// Convert wire rows into records, dropping rows with an unknown type tag.
pub fn records_from_rows<R>(rows: Vec<R>) -> Vec<TransactionRecord>
where
    R: TryInto<TransactionRecord, Error = i64>,
{
    rows.into_iter()
        .filter_map(|row| match row.try_into() {
            Ok(record) => Some(record),
            Err(tag) => {
                tracing::debug!(tag, "Skipping row with unknown transaction type");
                None
            }
        })
        .collect()
}
