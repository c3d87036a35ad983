//! Paginated raw invoice rows for a billing-date window.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde_json::Value;

use super::AppState;
use crate::catalog::ReportId;
use crate::error::ReportError;
use crate::query_builder::{BindValue, ComposedQuery, RequestParameters};
use crate::reports::{self, sql, PaginatedEnvelope};

const DEFAULT_START_DATE: &str = "2026-02-01";
const DEFAULT_END_DATE: &str = "2026-02-28";
const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 1000;

/// Validated paging window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDataQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub page: i64,
    pub limit: i64,
}

impl ProductDataQuery {
    pub fn from_params(params: &RequestParameters) -> Result<Self, ReportError> {
        let start_date = parse_date("startDate", params.get("startDate"), DEFAULT_START_DATE)?;
        let end_date = parse_date("endDate", params.get("endDate"), DEFAULT_END_DATE)?;
        let page = parse_positive("page", params.get("page"), DEFAULT_PAGE)?;
        let limit = parse_positive("limit", params.get("limit"), DEFAULT_LIMIT)?;

        Ok(Self {
            start_date,
            end_date,
            page,
            limit,
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total - 1) / self.limit + 1
    }
}

fn parse_date(
    name: &'static str,
    raw: Option<&str>,
    default: &str,
) -> Result<NaiveDate, ReportError> {
    let raw = raw.unwrap_or(default);
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ReportError::InvalidParameter {
        name,
        reason: format!("'{raw}' is not a YYYY-MM-DD date"),
    })
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: i64) -> Result<i64, ReportError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ReportError::InvalidParameter {
            name,
            reason: format!("'{raw}' is not a positive integer"),
        }),
    }
}

/// Handler for GET /api/product-data
pub async fn get_product_data(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<PaginatedEnvelope>, ReportError> {
    let window = ProductDataQuery::from_params(&RequestParameters::from(query))?;

    let count_query = ComposedQuery::fixed(
        &sql::PRODUCT_DATA_COUNT,
        vec![
            BindValue::Date(window.start_date),
            BindValue::Date(window.end_date),
        ],
    )?;
    let count_rows = reports::execute(&state, ReportId::ProductData, &count_query).await?;
    let total = count_rows
        .first()
        .and_then(|row| row.get("total"))
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let page_query = ComposedQuery::fixed(
        &sql::PRODUCT_DATA_PAGE,
        vec![
            BindValue::Date(window.start_date),
            BindValue::Date(window.end_date),
            BindValue::BigInt(window.limit),
            BindValue::BigInt(window.offset()),
        ],
    )?;
    let data = reports::execute(&state, ReportId::ProductData, &page_query).await?;

    Ok(Json(PaginatedEnvelope {
        success: true,
        total,
        page: window.page,
        limit: window.limit,
        total_pages: window.total_pages(total),
        count: data.len(),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RequestParameters {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_defaults() {
        let window = ProductDataQuery::from_params(&RequestParameters::new()).unwrap();
        assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(window.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, 1000);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_paging_math() {
        let window =
            ProductDataQuery::from_params(&params(&[("page", "3"), ("limit", "50")])).unwrap();
        assert_eq!(window.offset(), 100);
        assert_eq!(window.total_pages(0), 0);
        assert_eq!(window.total_pages(50), 1);
        assert_eq!(window.total_pages(101), 3);
    }

    #[test]
    fn test_malformed_values_rejected() {
        let err = ProductDataQuery::from_params(&params(&[("startDate", "yesterday")])).unwrap_err();
        assert!(matches!(err, ReportError::InvalidParameter { name: "startDate", .. }));

        let err = ProductDataQuery::from_params(&params(&[("page", "0")])).unwrap_err();
        assert!(matches!(err, ReportError::InvalidParameter { name: "page", .. }));

        let err = ProductDataQuery::from_params(&params(&[("limit", "1; DROP")])).unwrap_err();
        assert!(matches!(err, ReportError::InvalidParameter { name: "limit", .. }));
    }
}
