use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/filters
///
/// Sorted distinct option lists for the three selector widgets.
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let options = state.sdk.filter_options().await?;
    Ok(Json(json!({ "data": options })))
}

/// GET /api/report
///
/// Row-level anomaly counters from the current load.
pub async fn get_report(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let report = state.sdk.report().await?;
    Ok(Json(json!({ "data": report })))
}
