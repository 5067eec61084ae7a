use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::SelectionParams;
use crate::state::AppState;

/// GET /api/detail?product_id=7200&dimension=ALL&month=ALL
///
/// The joined display table for the given selection, newest month first.
pub async fn get_detail(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Value>, AppError> {
    let rows = state.sdk.detail_rows(params.selection()).await?;

    let count = rows.len();
    Ok(Json(json!({ "data": rows, "count": count })))
}
