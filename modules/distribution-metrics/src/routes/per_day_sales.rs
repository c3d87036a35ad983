use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::RequestParameters;
use crate::reports::{self, sql, DisplayMode, ReportEnvelope};

/// Handler for GET /api/per-day-sales
///
/// Current-month sales per billing date.
pub async fn get_per_day_sales(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let mut params = RequestParameters::from(query);
    let template = match DisplayMode::take_from(&mut params) {
        DisplayMode::Efp => sql::PER_DAY_SALES_EFP,
        DisplayMode::Standard => sql::PER_DAY_SALES_TP,
    };

    let envelope = reports::run_filtered(&state, ReportId::PerDaySales, &template, params).await?;
    Ok(Json(envelope))
}
