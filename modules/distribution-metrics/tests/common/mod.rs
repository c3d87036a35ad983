//! Shared helpers for router tests: a recording executor double and a
//! request driver.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use distribution_metrics_rs::{
    catalog::ReportCatalog,
    executor::ReportExecutor,
    metrics::Metrics,
    query_builder::ComposedQuery,
    routes::{build_router, AppState},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Executor double that records every statement and replays canned rows.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<ComposedQuery>>,
    rows: Vec<Value>,
    failure: Option<String>,
}

impl RecordingExecutor {
    pub fn returning(rows: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            rows,
            ..Self::default()
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(message.to_string()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<ComposedQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportExecutor for RecordingExecutor {
    async fn fetch_rows(&self, query: &ComposedQuery) -> Result<Vec<Value>, sqlx::Error> {
        self.calls.lock().unwrap().push(query.clone());
        match &self.failure {
            Some(message) => Err(sqlx::Error::Protocol(message.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}

pub fn test_app(executor: Arc<RecordingExecutor>) -> Router {
    build_router(AppState {
        catalog: Arc::new(ReportCatalog::standard().expect("standard catalog")),
        executor,
        metrics: Metrics::new().expect("metrics"),
        environment: "test".to_string(),
    })
}

/// Issue a GET and return status plus the decoded JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
