//! Report execution against Postgres.
//!
//! The executor sits behind a trait so the HTTP layer can be driven without a
//! database in tests.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::query_builder::{BindValue, ComposedQuery};

#[async_trait]
pub trait ReportExecutor: Send + Sync {
    /// Run one composed statement and return its rows as JSON objects, in
    /// the order the database produced them.
    async fn fetch_rows(&self, query: &ComposedQuery) -> Result<Vec<Value>, sqlx::Error>;
}

/// Runs report statements in a read-only transaction on the shared pool.
#[derive(Clone)]
pub struct PgReportExecutor {
    pool: PgPool,
}

impl PgReportExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wrap report SQL so every row comes back as a single JSON object column.
fn row_json_sql(sql: &str) -> String {
    format!("SELECT row_to_json(report_row) FROM ({sql}) AS report_row")
}

#[async_trait]
impl ReportExecutor for PgReportExecutor {
    async fn fetch_rows(&self, query: &ComposedQuery) -> Result<Vec<Value>, sqlx::Error> {
        let sql = row_json_sql(query.sql());

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;

        let mut statement = sqlx::query_scalar::<_, Value>(&sql);
        for bind in query.binds() {
            statement = match bind {
                BindValue::Text(value) => statement.bind(value.clone()),
                BindValue::Date(value) => statement.bind(*value),
                BindValue::BigInt(value) => statement.bind(*value),
            };
        }

        let rows = statement.fetch_all(&mut *tx).await?;
        tx.commit().await?;

        Ok(rows)
    }
}
