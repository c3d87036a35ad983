//! Product inventory: stock on hand and stock still required to meet target.

use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::RequestParameters;
use crate::reports::{self, sql, ReportEnvelope};

/// Handler for GET /api/product-inventory/available
pub async fn get_inventory_available(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_filtered(
        &state,
        ReportId::InventoryAvailable,
        &sql::INVENTORY_AVAILABLE,
        RequestParameters::from(query),
    )
    .await?;
    Ok(Json(envelope))
}

/// Handler for GET /api/product-inventory/required
pub async fn get_inventory_required(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_filtered(
        &state,
        ReportId::InventoryRequired,
        &sql::INVENTORY_REQUIRED,
        RequestParameters::from(query),
    )
    .await?;
    Ok(Json(envelope))
}
