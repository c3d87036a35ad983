//! Router-level tests driven through `oneshot` with no database.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use common::{get_json, test_app, RecordingExecutor};
use distribution_metrics_rs::query_builder::BindValue;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

fn text(value: &str) -> BindValue {
    BindValue::Text(value.to_string())
}

#[tokio::test]
async fn test_grouped_report_with_filters() {
    let executor = RecordingExecutor::returning(vec![json!({"Ctg": "Snacks", "AD": "North", "CMV": 10})]);
    let app = test_app(executor.clone());

    let (status, body) =
        get_json(&app, "/api/sales-summary?AD=North&groupBy=Ctg,AD&Ctg=Snacks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["groupBy"], json!(["Ctg", "AD"]));
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["CMV"], 10);

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    let query = &calls[0];
    assert_eq!(query.template(), "sales_summary_tp");
    assert!(query.sql().contains(r#""Ctg" AS "Ctg", "AD" AS "AD""#));
    assert!(query.sql().contains("AND t01.\"AD\" = $1\nAND t01.\"Ctg\" = $2"));
    assert!(query.sql().contains(r#"GROUP BY "Ctg", "AD""#));
    assert_eq!(query.binds(), &[text("North"), text("Snacks")]);
}

#[tokio::test]
async fn test_invalid_group_by_never_reaches_executor() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    let (status, body) = get_json(&app, "/api/sales-summary?groupBy=Ctg,Foo").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["invalidKeys"], json!(["Foo"]));
    let allowed = body["allowedKeys"].as_array().unwrap();
    assert!(allowed.contains(&json!("Ctg")));
    assert!(allowed.contains(&json!("AD")));
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid groupBy value(s): Foo. Allowed: Ctg"));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_empty_group_by_is_rejected() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    let (status, body) = get_json(&app, "/api/sales-achievements?groupBy=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["invalidKeys"], json!([""]));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_default_group_by_applies() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    let (status, body) = get_json(&app, "/api/sales-growth-national").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["groupBy"], json!(["team_desc"]));
    assert_eq!(body["count"], 0);
    assert_eq!(executor.calls()[0].template(), "sales_growth_national_units");
}

#[tokio::test]
async fn test_display_mode_selects_template() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    get_json(&app, "/api/sales-summary?displayMode=EFP").await;
    get_json(&app, "/api/sales-growth-national?displayMode=EFP").await;
    get_json(&app, "/api/per-day-sales?displayMode=EFP").await;
    get_json(&app, "/api/per-day-sales?displayMode=efp").await;

    let templates: Vec<&str> = executor.calls().iter().map(|q| q.template()).collect();
    assert_eq!(
        templates,
        vec![
            "sales_summary_efp",
            "sales_growth_national_tp",
            "per_day_sales_efp",
            "per_day_sales_tp",
        ]
    );
    assert!(executor.calls().iter().all(|q| q.binds().is_empty()));
}

#[tokio::test]
async fn test_hostile_values_and_unknown_keys() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    let (status, _) = get_json(
        &app,
        "/api/sales-summary/total?Ctg=%27%3B%20DROP%20TABLE%20x%3B%20--&%22AD%22=North&colour=red&region_desc=",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let query = &executor.calls()[0];
    assert!(!query.sql().contains("DROP"));
    assert!(!query.sql().contains("colour"));
    assert!(query.sql().contains("AND t01.\"Ctg\" = $1"));
    assert!(!query.sql().contains("$2"));
    assert_eq!(query.binds(), &[text("'; DROP TABLE x; --")]);
}

#[tokio::test]
async fn test_regional_filter_only_where_allowed() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    get_json(&app, "/api/sales-summary/total?region_desc=South").await;
    get_json(&app, "/api/sales-achievements/total?region_desc=South").await;

    let calls = executor.calls();
    assert_eq!(calls[0].binds(), &[text("South")]);
    assert!(calls[0].sql().contains("AND t02.region_desc = $1"));
    assert!(calls[1].binds().is_empty());
}

#[tokio::test]
async fn test_branch_wise_detail_echoes_group_by() {
    let executor = RecordingExecutor::returning(vec![json!({"distributor_desc": "D1"})]);
    let app = test_app(executor.clone());

    let (status, body) =
        get_json(&app, "/api/sales-branch-wise/detail?groupBy=AD&channel=Retail").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["groupBy"], json!(["AD"]));
    let query = &executor.calls()[0];
    assert_eq!(query.template(), "sales_branch_wise_detail");
    assert!(query.sql().contains("AND t01.channel = $1"));
    assert_eq!(query.binds(), &[text("Retail")]);

    let (status, _) = get_json(&app, "/api/sales-branch-wise/detail?groupBy=region").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(executor.calls().len(), 1);
}

#[tokio::test]
async fn test_fixed_reports_ignore_parameters() {
    let executor = RecordingExecutor::returning(vec![json!({"a": 1}), json!({"a": 2})]);
    let app = test_app(executor.clone());

    let (status, body) = get_json(&app, "/api/filters?AD=North&groupBy=Foo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert!(body.get("groupBy").is_none());
    let query = &executor.calls()[0];
    assert_eq!(query.sql(), "SELECT * FROM mv_datasets_filter");
    assert!(query.binds().is_empty());
}

#[tokio::test]
async fn test_database_failure_envelope() {
    let executor = RecordingExecutor::failing("connection reset");
    let app = test_app(executor.clone());

    let (status, body) = get_json(&app, "/api/mtd-sales-detail").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error fetching data");
    assert!(body["error"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_product_data_pagination() {
    let executor = RecordingExecutor::returning(vec![json!({"total": 2500})]);
    let app = test_app(executor.clone());

    let (status, body) =
        get_json(&app, "/api/product-data?startDate=2026-03-01&endDate=2026-03-31&page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2500);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 1000);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["count"], 1);

    let calls = executor.calls();
    assert_eq!(calls.len(), 2);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
    assert_eq!(calls[0].binds(), &[BindValue::Date(start), BindValue::Date(end)]);
    assert_eq!(
        calls[1].binds(),
        &[
            BindValue::Date(start),
            BindValue::Date(end),
            BindValue::BigInt(1000),
            BindValue::BigInt(1000),
        ]
    );
}

#[tokio::test]
async fn test_product_data_rejects_malformed_paging() {
    let executor = RecordingExecutor::returning(vec![]);
    let app = test_app(executor.clone());

    let (status, body) = get_json(&app, "/api/product-data?limit=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("limit"));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app(RecordingExecutor::returning(vec![]));

    let (status, body) = get_json(&app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Route not found", "path": "/api/nope"}));
}

#[tokio::test]
async fn test_health_and_root_info() {
    let app = test_app(RecordingExecutor::returning(vec![]));

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["environment"], "test");

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Distribution Metrics Backend API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["endpoints"]["api"]["salesSummary"], "/api/sales-summary");
}

#[tokio::test]
async fn test_trace_id_propagated() {
    let app = test_app(RecordingExecutor::returning(vec![]));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-trace-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-trace-id"], "abc-123");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-trace-id"));
}

#[tokio::test]
async fn test_metrics_record_reports() {
    let app = test_app(RecordingExecutor::returning(vec![]));

    get_json(&app, "/api/daily-sales-avg").await;

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains(r#"report_queries_total{report="daily_sales_avg",result="ok"} 1"#));
    assert!(text.contains(r#"path="/api/daily-sales-avg""#));
}
