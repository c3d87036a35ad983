//! Sales achievement against SAP targets.

use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::RequestParameters;
use crate::reports::{self, sql, ReportEnvelope};

/// Handler for GET /api/sales-achievements
pub async fn get_sales_achievements(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_grouped(
        &state,
        ReportId::SalesAchievements,
        &sql::SALES_ACHIEVEMENTS,
        RequestParameters::from(query),
    )
    .await?;
    Ok(Json(envelope))
}

/// Handler for GET /api/sales-achievements/total
pub async fn get_sales_achievements_total(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_filtered(
        &state,
        ReportId::SalesAchievementsTotal,
        &sql::SALES_ACHIEVEMENTS_TOTAL,
        RequestParameters::from(query),
    )
    .await?;
    Ok(Json(envelope))
}
