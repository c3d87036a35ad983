use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::PoolConfig;

/// Initialize a connection pool to the PostgreSQL database
///
/// Every session gets `statement_timeout` and
/// `idle_in_transaction_session_timeout` so a runaway report cannot hold a
/// connection indefinitely.
pub async fn init_pool(database_url: &str, config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let timeout = config.statement_timeout_ms.to_string();
    let options = PgConnectOptions::from_str(database_url)?.options([
        ("statement_timeout", timeout.as_str()),
        ("idle_in_transaction_session_timeout", timeout.as_str()),
    ]);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await
}

/// Round trip a trivial statement to prove the database is reachable.
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
