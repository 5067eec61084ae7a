use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::SelectionParams;
use crate::state::AppState;

/// GET /api/stats/dimensions
///
/// Mean/min/max net price per dimension for the given selection.
pub async fn get_dimension_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Value>, AppError> {
    let stats = state.sdk.dimension_stats(params.selection()).await?;
    Ok(Json(json!({ "data": stats })))
}

/// GET /api/stats/products
///
/// Mean/min/max/latest net price per product for the given selection.
pub async fn get_product_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Value>, AppError> {
    let stats = state.sdk.product_stats(params.selection()).await?;
    Ok(Json(json!({ "data": stats })))
}

/// GET /api/products/:product_id/profile
///
/// Chart-header info for a single product.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let profile = state.sdk.product_profile(product_id).await?;

    match profile {
        Some(p) => Ok(Json(json!({ "data": p }))),
        None => Err(AppError::not_found("Product not found")),
    }
}
