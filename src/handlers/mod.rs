pub mod api;
pub mod categories;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Category universe
        .route("/api/categories", get(categories::index))
        // API (JSON for charts)
        .route("/api/charts/monthly", get(api::monthly))
        .route("/api/charts/transactions", get(api::transactions))
        .route("/api/charts/categories", get(api::categories))
        .route("/api/charts/categories/:id", get(api::category_monthly))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
