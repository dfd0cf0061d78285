pub mod category;
pub mod transaction;

pub use category::{category_labels, Category};
pub use transaction::{
    records_from_rows, LabelTotalRow, MonthlyTotalRow, TransactionRecord, TransactionRow,
    TransactionType,
};
