//! Record Services - Main entry point
//!
//! Serves the contact, task and appointment services over the Model Context
//! Protocol on stdin/stdout.

use anyhow::Result;
use record_services::{Config, Metrics, RecordsMcpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr only; stdout carries MCP traffic
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();
    let server = RecordsMcpServer::new(&config, metrics.clone());

    info!(
        server_name = %config.server_name,
        max_search_results = config.max_search_results,
        "Starting MCP server with stdio transport"
    );
    record_services::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        calls = summary.calls_total,
        failures = summary.failures_total,
        avg_us = summary.duration_avg_us,
        "Record services shutdown complete"
    );
    Ok(())
}
