//! HTTP server for the salary reporter.
//!
//! Reads its configuration path from `SALARY_REPORT_CONFIG` and its bind
//! address from `SALARY_REPORT_ADDR`. Log verbosity follows `RUST_LOG`.

use std::env;
use std::path::Path;

use salary_reporter::api::{AppState, create_router};
use salary_reporter::config::ConfigLoader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/report.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path =
        env::var("SALARY_REPORT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = if Path::new(&config_path).exists() {
        ConfigLoader::load(&config_path)?
    } else {
        warn!(path = %config_path, "Configuration file not found, using defaults");
        ConfigLoader::default()
    };

    let addr = env::var("SALARY_REPORT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, config = %config_path, "Salary reporter listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
