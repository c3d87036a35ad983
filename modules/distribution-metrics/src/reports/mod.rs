//! Report runners shared by the HTTP handlers.
//!
//! Each runner pulls the report's allow-lists from the catalog, builds the
//! filter clause and group-by selection, composes the fixed SQL and hands the
//! statement to the executor.

pub mod sql;

use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{GroupBySpec, ReportId};
use crate::error::ReportError;
use crate::query_builder::{
    build_filter_clause, build_group_by_selection, compose_template, ComposedQuery,
    GroupBySelection, RequestParameters, SqlTemplate,
};
use crate::routes::AppState;

pub const GROUP_BY_PARAM: &str = "groupBy";
pub const DISPLAY_MODE_PARAM: &str = "displayMode";

/// Success envelope for every unpaginated report.
#[derive(Debug, Serialize)]
pub struct ReportEnvelope {
    pub success: bool,
    #[serde(rename = "groupBy", skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<&'static str>>,
    pub count: usize,
    pub data: Vec<Value>,
}

impl ReportEnvelope {
    pub fn new(data: Vec<Value>) -> Self {
        Self {
            success: true,
            group_by: None,
            count: data.len(),
            data,
        }
    }

    pub fn grouped(selection: &GroupBySelection, data: Vec<Value>) -> Self {
        Self {
            group_by: Some(selection.keys()),
            ..Self::new(data)
        }
    }
}

/// Success envelope for `/api/product-data`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedEnvelope {
    pub success: bool,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub count: usize,
    pub data: Vec<Value>,
}

/// Valuation basis requested with `displayMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Standard,
    Efp,
}

impl DisplayMode {
    /// Only the exact value `EFP` switches mode; anything else is the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("EFP") => DisplayMode::Efp,
            _ => DisplayMode::Standard,
        }
    }

    /// Remove `displayMode` from `params` so it never reaches the filter builder.
    pub fn take_from(params: &mut RequestParameters) -> Self {
        Self::parse(params.take(DISPLAY_MODE_PARAM).as_deref())
    }
}

/// Execute a composed statement, recording timing and outcome.
pub async fn execute(
    state: &AppState,
    report: ReportId,
    query: &ComposedQuery,
) -> Result<Vec<Value>, ReportError> {
    let start = Instant::now();
    let result = state.executor.fetch_rows(query).await;
    let elapsed = start.elapsed().as_secs_f64();

    state
        .metrics
        .observe_report(report.as_str(), result.is_ok(), elapsed);

    match result {
        Ok(rows) => {
            tracing::info!(
                report = %report,
                template = query.template(),
                count = rows.len(),
                "report fetched"
            );
            Ok(rows)
        }
        Err(err) => {
            tracing::error!(
                report = %report,
                template = query.template(),
                error = %err,
                "report query failed"
            );
            Err(ReportError::QueryExecutionFailed(err))
        }
    }
}

/// Report with no request-driven SQL at all.
pub async fn run_fixed(
    state: &AppState,
    report: ReportId,
    template: &SqlTemplate,
) -> Result<ReportEnvelope, ReportError> {
    let query = ComposedQuery::fixed(template, Vec::new())?;
    let rows = execute(state, report, &query).await?;
    Ok(ReportEnvelope::new(rows))
}

/// Report narrowed by allow-listed filters only.
pub async fn run_filtered(
    state: &AppState,
    report: ReportId,
    template: &SqlTemplate,
    mut params: RequestParameters,
) -> Result<ReportEnvelope, ReportError> {
    strip_control_params(&mut params);

    let definition = state.catalog.get(report)?;
    let filters = build_filter_clause(&definition.filters, &params);
    let query = compose_template(template, &filters, None)?;

    let rows = execute(state, report, &query).await?;
    Ok(ReportEnvelope::new(rows))
}

/// Report with filters and a caller-chosen grouping.
///
/// An invalid `groupBy` fails here, before any SQL is composed or executed.
pub async fn run_grouped(
    state: &AppState,
    report: ReportId,
    template: &SqlTemplate,
    mut params: RequestParameters,
) -> Result<ReportEnvelope, ReportError> {
    let selection = take_group_by(state, report, &mut params)?;
    strip_control_params(&mut params);

    let definition = state.catalog.get(report)?;
    let filters = build_filter_clause(&definition.filters, &params);
    let query = compose_template(template, &filters, Some(&selection))?;

    let rows = execute(state, report, &query).await?;
    Ok(ReportEnvelope::grouped(&selection, rows))
}

/// Validate `groupBy` against the report's group-by allow-list and remove it
/// from `params`.
pub fn take_group_by(
    state: &AppState,
    report: ReportId,
    params: &mut RequestParameters,
) -> Result<GroupBySelection, ReportError> {
    let definition = state.catalog.get(report)?;
    let GroupBySpec {
        allow_list,
        default_key,
    } = definition.group_by.ok_or_else(|| ReportError::InvalidParameter {
        name: GROUP_BY_PARAM,
        reason: format!("report {report} does not support grouping"),
    })?;

    let raw = params.take(GROUP_BY_PARAM);
    let selection = build_group_by_selection(&allow_list, raw.as_deref(), default_key)?;
    Ok(selection)
}

fn strip_control_params(params: &mut RequestParameters) {
    params.take(GROUP_BY_PARAM);
    params.take(DISPLAY_MODE_PARAM);
}
