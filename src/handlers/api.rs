use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::date_utils::{parse_reference_date, trailing_months, MAX_WINDOW_MONTHS};
use crate::error::{AppError, AppResult};
use crate::models::category_labels;
use crate::services::aggregation::{aggregate_by_category, aggregate_by_month, SeriesDataset};
use crate::services::chart::ChartData;
use crate::services::or_empty;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Series,
    Chart,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    pub reference_date: Option<String>,
    pub months: Option<String>,
    #[serde(default)]
    pub format: ChartFormat,
}

impl ChartParams {
    fn reference_date(&self) -> AppResult<NaiveDate> {
        match &self.reference_date {
            Some(s) => parse_reference_date(s),
            None => Ok(Local::now().date_naive()),
        }
    }

    fn month_labels(&self, default_months: usize) -> AppResult<Vec<String>> {
        let out_of_range = || {
            AppError::Validation(format!(
                "months must be between 1 and {}",
                MAX_WINDOW_MONTHS
            ))
        };
        let count = match self.months.as_deref() {
            Some(s) => s.trim().parse::<usize>().map_err(|_| out_of_range())?,
            None => default_months,
        };
        if count == 0 || count > MAX_WINDOW_MONTHS {
            return Err(out_of_range());
        }
        Ok(trailing_months(self.reference_date()?, count))
    }
}

fn respond(dataset: SeriesDataset, format: ChartFormat) -> Response {
    match format {
        ChartFormat::Series => Json(dataset).into_response(),
        ChartFormat::Chart => Json(ChartData::from(dataset)).into_response(),
    }
}

/// Income and expense per month over the trailing window.
pub async fn monthly(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<Response> {
    let months = params.month_labels(state.config.window_months)?;
    let records = or_empty(state.source.monthly_totals().await, "monthly totals")?;

    tracing::debug!(
        record_count = records.len(),
        month_count = months.len(),
        "Building monthly chart"
    );

    Ok(respond(aggregate_by_month(&records, &months), params.format))
}

/// Income and expense per month, computed from the plain transaction listing.
pub async fn transactions(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<Response> {
    let months = params.month_labels(state.config.window_months)?;
    let records = or_empty(state.source.transactions().await, "transactions")?;

    Ok(respond(aggregate_by_month(&records, &months), params.format))
}

/// Income and expense per category, over every known category.
pub async fn categories(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> AppResult<Response> {
    let records = or_empty(state.source.label_totals().await, "label totals")?;
    let categories = or_empty(state.source.categories().await, "categories")?;
    let labels = category_labels(&categories);

    tracing::debug!(
        record_count = records.len(),
        category_count = labels.len(),
        "Building category chart"
    );

    Ok(respond(aggregate_by_category(&records, &labels), params.format))
}

/// One category's income and expense per month over the trailing window.
pub async fn category_monthly(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(params): Query<ChartParams>,
) -> AppResult<Response> {
    let months = params.month_labels(state.config.window_months)?;
    let records = or_empty(
        state.source.category_monthly_totals(category_id).await,
        "category monthly totals",
    )?;

    tracing::debug!(
        category_id,
        record_count = records.len(),
        "Building category-wise monthly chart"
    );

    Ok(respond(aggregate_by_month(&records, &months), params.format))
}
