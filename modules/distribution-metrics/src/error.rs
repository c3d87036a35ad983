//! Report errors and their JSON envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::query_builder::{InvalidGroupByKey, TemplateError};

#[derive(Debug, Error)]
pub enum ReportError {
    /// Rejected before any SQL is built.
    #[error(transparent)]
    InvalidGroupByKey(#[from] InvalidGroupByKey),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Query execution failed: {0}")]
    QueryExecutionFailed(#[from] sqlx::Error),

    #[error("Report template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Report catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ReportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::InvalidGroupByKey(_) | ReportError::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            ReportError::QueryExecutionFailed(_)
            | ReportError::Template(_)
            | ReportError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ReportError::InvalidGroupByKey(err) => json!({
                "success": false,
                "message": err.to_string(),
                "invalidKeys": err.invalid_keys,
                "allowedKeys": err.allowed_keys,
            }),
            ReportError::InvalidParameter { .. } => json!({
                "success": false,
                "message": self.to_string(),
            }),
            ReportError::QueryExecutionFailed(err) => {
                tracing::error!(error = %err, "report query failed");
                json!({
                    "success": false,
                    "message": "Error fetching data",
                    "error": err.to_string(),
                })
            }
            ReportError::Template(_) | ReportError::Catalog(_) => {
                tracing::error!(error = %self, "report misconfigured");
                json!({
                    "success": false,
                    "message": "Error fetching data",
                    "error": self.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
