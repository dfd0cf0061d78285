use axum::extract::State;
use axum::response::Json;

use crate::error::AppResult;
use crate::models::Category;
use crate::services::or_empty;
use crate::state::AppState;

/// The category universe, used to populate the category picker.
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = or_empty(state.source.categories().await, "categories")?;
    Ok(Json(categories))
}
