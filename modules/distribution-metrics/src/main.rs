use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use distribution_metrics_rs::{
    catalog::ReportCatalog,
    config::Config,
    db,
    executor::PgReportExecutor,
    metrics::Metrics,
    routes::{build_router, AppState},
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Starting distribution metrics service...");

    let config = Config::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        "Configuration loaded: host={}, port={}, environment={}",
        config.host,
        config.port,
        config.environment
    );

    tracing::info!("Connecting to database...");
    let pool = match db::init_pool(&config.database_url, &config.pool).await {
        Ok(pool) => pool,
        Err(e) => exit_with_setup_hints(&e),
    };
    if let Err(e) = db::test_connection(&pool).await {
        exit_with_setup_hints(&e);
    }
    tracing::info!("Database connection established");

    let catalog = ReportCatalog::standard().expect("Report catalog is misconfigured");
    let metrics = Metrics::new().expect("Failed to register metrics");

    let state = AppState {
        catalog: Arc::new(catalog),
        executor: Arc::new(PgReportExecutor::new(pool)),
        metrics,
        environment: config.environment.clone(),
    };
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST:PORT must form a valid socket address");
    tracing::info!("Distribution metrics service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}

fn exit_with_setup_hints(error: &sqlx::Error) -> ! {
    tracing::error!(error = %error, "Failed to connect to database");
    tracing::error!("Set DATABASE_URL, or DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASSWORD, in the environment or a .env file");
    std::process::exit(1);
}
