//! National sales growth.

use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::RequestParameters;
use crate::reports::{self, sql, DisplayMode, ReportEnvelope};

/// Handler for GET /api/sales-growth-national
///
/// `displayMode=EFP` reports TP value growth; otherwise unit and EFP metrics.
pub async fn get_sales_growth_national(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let mut params = RequestParameters::from(query);
    let template = match DisplayMode::take_from(&mut params) {
        DisplayMode::Efp => sql::SALES_GROWTH_NATIONAL_TP,
        DisplayMode::Standard => sql::SALES_GROWTH_NATIONAL_UNITS,
    };

    let envelope =
        reports::run_grouped(&state, ReportId::SalesGrowthNational, &template, params).await?;
    Ok(Json(envelope))
}

/// Handler for GET /api/sales-growth-national/table
pub async fn get_sales_growth_national_table(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_filtered(
        &state,
        ReportId::SalesGrowthNationalTable,
        &sql::SALES_GROWTH_NATIONAL_TABLE,
        RequestParameters::from(query),
    )
    .await?;
    Ok(Json(envelope))
}
