//! HTTP surface: one handler module per report family.

pub mod branch_wise;
pub mod datasets;
pub mod inventory;
pub mod metrics;
pub mod per_day_sales;
pub mod product_data;
pub mod sales_achievements;
pub mod sales_growth;
pub mod sales_summary;

use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::ReportCatalog;
use crate::executor::ReportExecutor;
use crate::health::{health, root_info};
use crate::metrics::Metrics;
use crate::middleware::{metrics::metrics_middleware, trace_id::trace_id_middleware};

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ReportCatalog>,
    pub executor: Arc<dyn ReportExecutor>,
    pub metrics: Metrics,
    pub environment: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_info))
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .route("/api/filters", get(datasets::get_dataset_filters))
        .route("/api/daily-sales-avg", get(datasets::get_daily_sales_avg))
        .route("/api/mtd-sales-detail", get(datasets::get_mtd_sales_detail))
        .route("/api/product-data", get(product_data::get_product_data))
        .route("/api/sales-summary", get(sales_summary::get_sales_summary))
        .route("/api/sales-summary/total", get(sales_summary::get_sales_summary_total))
        .route("/api/per-day-sales", get(per_day_sales::get_per_day_sales))
        .route("/api/sales-growth-national", get(sales_growth::get_sales_growth_national))
        .route(
            "/api/sales-growth-national/table",
            get(sales_growth::get_sales_growth_national_table),
        )
        .route(
            "/api/product-inventory/available",
            get(inventory::get_inventory_available),
        )
        .route(
            "/api/product-inventory/required",
            get(inventory::get_inventory_required),
        )
        .route(
            "/api/sales-branch-wise/detail",
            get(branch_wise::get_sales_branch_wise_detail),
        )
        .route(
            "/api/sales-branch-wise/growth",
            get(branch_wise::get_sales_branch_wise_growth),
        )
        .route(
            "/api/sales-achievements",
            get(sales_achievements::get_sales_achievements),
        )
        .route(
            "/api/sales-achievements/total",
            get(sales_achievements::get_sales_achievements_total),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(middleware::from_fn(trace_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path(),
        })),
    )
}
