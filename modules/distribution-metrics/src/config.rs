use std::env;
use std::str::FromStr;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub pool: PoolConfig,
}

/// Connection pool sizing and session timeouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub statement_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => database_url_from_parts()?,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = parse_var("PORT", 3008)?;

        let environment = env::var("APP_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            host,
            port,
            environment,
            pool: PoolConfig::from_env()?,
        })
    }
}

impl PoolConfig {
    pub fn from_env() -> Result<Self, String> {
        let pool = PoolConfig {
            max_connections: parse_var("DB_MAX_CONNECTIONS", 50)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", 30)?,
            acquire_timeout_secs: parse_var("DB_ACQUIRE_TIMEOUT_SECS", 300)?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", 10)?,
            statement_timeout_ms: parse_var("DB_STATEMENT_TIMEOUT_MS", 120_000)?,
        };

        if pool.min_connections > pool.max_connections {
            return Err(format!(
                "DB_MIN_CONNECTIONS ({}) must not exceed DB_MAX_CONNECTIONS ({})",
                pool.min_connections, pool.max_connections
            ));
        }

        Ok(pool)
    }
}

fn database_url_from_parts() -> Result<String, String> {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port: u16 = parse_var("DB_PORT", 5432)?;
    let name = env::var("DB_NAME")
        .map_err(|_| "DATABASE_URL or DB_NAME must be set".to_string())?;
    let user = env::var("DB_USER")
        .map_err(|_| "DATABASE_URL or DB_USER must be set".to_string())?;
    let password = env::var("DB_PASSWORD").unwrap_or_default();

    Ok(build_database_url(&host, port, &name, &user, &password))
}

fn build_database_url(host: &str, port: u16, name: &str, user: &str, password: &str) -> String {
    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{name}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{name} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
