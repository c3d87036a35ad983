pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod executor;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod query_builder;
pub mod reports;
pub mod routes;
