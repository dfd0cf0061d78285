use std::sync::Arc;

use crate::config::Config;
use crate::services::TransactionSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<TransactionSource>,
}
