//! Pass-through views that take no parameters.

use axum::{extract::State, Json};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::reports::{self, sql, ReportEnvelope};

/// Handler for GET /api/filters
pub async fn get_dataset_filters(
    State(state): State<AppState>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope =
        reports::run_fixed(&state, ReportId::DatasetFilters, &sql::DATASET_FILTERS).await?;
    Ok(Json(envelope))
}

/// Handler for GET /api/daily-sales-avg
pub async fn get_daily_sales_avg(
    State(state): State<AppState>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope =
        reports::run_fixed(&state, ReportId::DailySalesAvg, &sql::DAILY_SALES_AVG).await?;
    Ok(Json(envelope))
}

/// Handler for GET /api/mtd-sales-detail
pub async fn get_mtd_sales_detail(
    State(state): State<AppState>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope =
        reports::run_fixed(&state, ReportId::MtdSalesDetail, &sql::MTD_SALES_DETAIL).await?;
    Ok(Json(envelope))
}
