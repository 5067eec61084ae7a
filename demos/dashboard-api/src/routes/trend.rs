use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::SelectionParams;
use crate::state::AppState;

/// GET /api/trend?product_id=ALL&dimension=ALL&month=ALL
///
/// The gap-filled monthly series behind the dual-axis chart: bars are total
/// shipped quantity, the line is the mean net price.
pub async fn get_trend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Value>, AppError> {
    let series = state.sdk.trend_series(params.selection()).await?;

    let count = series.len();
    Ok(Json(json!({ "data": series, "count": count })))
}
