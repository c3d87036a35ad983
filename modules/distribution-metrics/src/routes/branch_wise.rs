//! Distributor (branch) sales.

use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::RequestParameters;
use crate::reports::{self, sql, ReportEnvelope};

/// Handler for GET /api/sales-branch-wise/detail
///
/// Rows are always per distributor. `groupBy` is still validated and echoed
/// so clients share one contract with the other grouped reports.
pub async fn get_sales_branch_wise_detail(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let mut params = RequestParameters::from(query);
    let selection = reports::take_group_by(&state, ReportId::SalesBranchWiseDetail, &mut params)?;

    let mut envelope = reports::run_filtered(
        &state,
        ReportId::SalesBranchWiseDetail,
        &sql::SALES_BRANCH_WISE_DETAIL,
        params,
    )
    .await?;
    envelope.group_by = Some(selection.keys());
    Ok(Json(envelope))
}

/// Handler for GET /api/sales-branch-wise/growth
pub async fn get_sales_branch_wise_growth(
    State(state): State<AppState>,
) -> Result<Json<ReportEnvelope>, ReportError> {
    let envelope = reports::run_fixed(
        &state,
        ReportId::SalesBranchWiseGrowth,
        &sql::SALES_BRANCH_WISE_GROWTH,
    )
    .await?;
    Ok(Json(envelope))
}
