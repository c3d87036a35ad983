//! Month-to-date sales summary against the previous month.

use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::RequestParameters;
use crate::reports::{self, sql, DisplayMode, ReportEnvelope};

/// Handler for GET /api/sales-summary
///
/// Grouped by `groupBy` (default `Ctg`); `displayMode=EFP` values sales at EFP
/// instead of gross amount.
pub async fn get_sales_summary(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let mut params = RequestParameters::from(query);
    let template = match DisplayMode::take_from(&mut params) {
        DisplayMode::Efp => sql::SALES_SUMMARY_EFP,
        DisplayMode::Standard => sql::SALES_SUMMARY_TP,
    };

    let envelope = reports::run_grouped(&state, ReportId::SalesSummary, &template, params).await?;
    Ok(Json(envelope))
}

/// Handler for GET /api/sales-summary/total
pub async fn get_sales_summary_total(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_filtered(
        &state,
        ReportId::SalesSummaryTotal,
        &sql::SALES_SUMMARY_TOTAL,
        RequestParameters::from(query),
    )
    .await?;
    Ok(Json(envelope))
}
