use axum::{extract::State, Json};
use serde_json::Value;

use crate::routes::AppState;

/// Service info at `/`, with a map of the main endpoints.
pub async fn root_info(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "name": "Distribution Metrics Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": state.environment,
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics",
            "api": {
                "filters": "/api/filters",
                "productData": "/api/product-data",
                "dailySalesAvg": "/api/daily-sales-avg",
                "mtdSalesDetail": "/api/mtd-sales-detail",
                "salesSummary": "/api/sales-summary",
                "salesSummaryTotal": "/api/sales-summary/total",
                "perDaySales": "/api/per-day-sales",
                "salesGrowthNational": "/api/sales-growth-national",
                "salesGrowthNationalTable": "/api/sales-growth-national/table",
                "inventoryAvailable": "/api/product-inventory/available",
                "inventoryRequired": "/api/product-inventory/required",
                "salesBranchWiseDetail": "/api/sales-branch-wise/detail",
                "salesBranchWiseGrowth": "/api/sales-branch-wise/growth",
                "salesAchievements": "/api/sales-achievements",
                "salesAchievementsTotal": "/api/sales-achievements/total",
            },
        },
    }))
}

/// Health check endpoint handler
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": state.environment,
    }))
}
